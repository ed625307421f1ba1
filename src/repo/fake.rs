//! In-memory [`DishRepository`] for handler tests: full contract semantics,
//! no backing store, no network.

use crate::models::{Dish, MealType};
use crate::repo::{DishRepository, RepositoryError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct FakeDishRepository {
    dishes: RwLock<HashMap<Uuid, Dish>>,
}

impl FakeDishRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DishRepository for FakeDishRepository {
    async fn create_dish(&self, dish: &Dish) -> Result<(), RepositoryError> {
        self.dishes.write().unwrap().insert(dish.id, dish.clone());
        Ok(())
    }

    async fn get_dish(&self, id: Uuid) -> Result<Dish, RepositoryError> {
        self.dishes
            .read()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn update_dish(&self, id: Uuid, dish: &Dish) -> Result<(), RepositoryError> {
        let mut dishes = self.dishes.write().unwrap();
        if !dishes.contains_key(&id) {
            return Err(RepositoryError::NotFound(id));
        }
        dishes.insert(id, dish.clone());
        Ok(())
    }

    async fn delete_dish(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.dishes
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn get_dishes_by_type(
        &self,
        meal_type: MealType,
    ) -> Result<Vec<Dish>, RepositoryError> {
        Ok(self
            .dishes
            .read()
            .unwrap()
            .values()
            .filter(|dish| dish.meal_type == meal_type)
            .cloned()
            .collect())
    }
}
