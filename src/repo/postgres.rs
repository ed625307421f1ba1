//! Relational backend: one row per dish, with recipe, ingredients, and
//! nutrition held in `jsonb` blob columns and decoded on every read.
//!
//! Known limitation, preserved from the service this replaces: the insert
//! and select paths carry no `tags` column, so tags are dropped on every
//! relational round-trip. Reads always return an empty tag list.

use crate::config::PostgresConfig;
use crate::db::{self, DbConnection, DbPool};
use crate::models::{Dish, MealType};
use crate::repo::{DishRepository, RepositoryError};
use crate::schema::dishes;
use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

pub struct PostgresDishRepository {
    pool: DbPool,
}

impl PostgresDishRepository {
    /// Builds the bounded pool and pings the database before returning, so a
    /// misconfigured or unreachable store fails construction rather than the
    /// first request.
    pub fn connect(cfg: &PostgresConfig) -> Result<Self, RepositoryError> {
        Ok(Self {
            pool: db::create_pool(cfg)?,
        })
    }

    fn conn(&self, op: &'static str) -> Result<DbConnection, RepositoryError> {
        self.pool
            .get()
            .map_err(|e| RepositoryError::persistence(op, e))
    }
}

#[derive(Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = dishes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
struct DishRow {
    id: Uuid,
    name: String,
    recipe: serde_json::Value,
    ingredients: serde_json::Value,
    nutrition: serde_json::Value,
    meal_type: String,
    cooking_time: i32,
    servings: i32,
}

impl DishRow {
    fn encode(dish: &Dish, op: &'static str) -> Result<Self, RepositoryError> {
        let recipe = serde_json::to_value(&dish.recipe)
            .map_err(|e| RepositoryError::serialization(op, "recipe", e))?;
        let ingredients = serde_json::to_value(&dish.ingredients)
            .map_err(|e| RepositoryError::serialization(op, "ingredients", e))?;
        let nutrition = serde_json::to_value(&dish.nutrition)
            .map_err(|e| RepositoryError::serialization(op, "nutrition", e))?;

        Ok(Self {
            id: dish.id,
            name: dish.name.clone(),
            recipe,
            ingredients,
            nutrition,
            meal_type: dish.meal_type.as_str().to_string(),
            cooking_time: dish.cooking_time,
            servings: dish.servings,
        })
    }

    /// Decodes the blob columns back into structured form. Any failure
    /// aborts the whole read; a dish is never returned partially populated.
    fn decode(self, op: &'static str) -> Result<Dish, RepositoryError> {
        let recipe = serde_json::from_value(self.recipe)
            .map_err(|e| RepositoryError::serialization(op, "recipe", e))?;
        let ingredients = serde_json::from_value(self.ingredients)
            .map_err(|e| RepositoryError::serialization(op, "ingredients", e))?;
        let nutrition = serde_json::from_value(self.nutrition)
            .map_err(|e| RepositoryError::serialization(op, "nutrition", e))?;
        let meal_type = MealType::parse(&self.meal_type).ok_or_else(|| {
            RepositoryError::serialization(
                op,
                "meal_type",
                format!("unknown meal type: {}", self.meal_type),
            )
        })?;

        Ok(Dish {
            id: self.id,
            name: self.name,
            recipe,
            ingredients,
            nutrition,
            meal_type,
            cooking_time: self.cooking_time,
            servings: self.servings,
            tags: Vec::new(),
        })
    }
}

#[async_trait]
impl DishRepository for PostgresDishRepository {
    async fn create_dish(&self, dish: &Dish) -> Result<(), RepositoryError> {
        let row = DishRow::encode(dish, "create dish")?;
        let mut conn = self.conn("create dish")?;

        diesel::insert_into(dishes::table)
            .values(&row)
            .execute(&mut conn)
            .map_err(|e| RepositoryError::persistence("create dish", e))?;

        Ok(())
    }

    async fn get_dish(&self, id: Uuid) -> Result<Dish, RepositoryError> {
        let mut conn = self.conn("get dish")?;

        let row: DishRow = dishes::table
            .find(id)
            .select(DishRow::as_select())
            .first(&mut conn)
            .map_err(|e| match e {
                diesel::NotFound => RepositoryError::NotFound(id),
                other => RepositoryError::persistence("get dish", other),
            })?;

        row.decode("get dish")
    }

    async fn update_dish(&self, id: Uuid, dish: &Dish) -> Result<(), RepositoryError> {
        let row = DishRow::encode(dish, "update dish")?;
        let mut conn = self.conn("update dish")?;

        // Unconditional update; a zero rows-affected count is the only
        // signal that the target is absent.
        let updated = diesel::update(dishes::table.find(id))
            .set(&row)
            .execute(&mut conn)
            .map_err(|e| RepositoryError::persistence("update dish", e))?;

        if updated == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }

    async fn delete_dish(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut conn = self.conn("delete dish")?;

        let deleted = diesel::delete(dishes::table.find(id))
            .execute(&mut conn)
            .map_err(|e| RepositoryError::persistence("delete dish", e))?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }

    async fn get_dishes_by_type(
        &self,
        meal_type: MealType,
    ) -> Result<Vec<Dish>, RepositoryError> {
        let mut conn = self.conn("list dishes")?;

        let rows: Vec<DishRow> = dishes::table
            .filter(dishes::meal_type.eq(meal_type.as_str()))
            .select(DishRow::as_select())
            .load(&mut conn)
            .map_err(|e| RepositoryError::persistence("list dishes", e))?;

        rows.into_iter()
            .map(|row| row.decode("list dishes"))
            .collect()
    }
}
