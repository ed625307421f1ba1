//! Storage-agnostic persistence for dishes.
//!
//! The HTTP layer depends on [`DishRepository`] alone; the concrete backend
//! is chosen once at startup by [`new_dish_repository`] and never switched
//! at runtime.

mod error;
#[cfg(test)]
pub mod fake;
mod mongo;
mod postgres;

pub use error::RepositoryError;
pub use mongo::MongoDishRepository;
pub use postgres::PostgresDishRepository;

use crate::config::DatabaseConfig;
use crate::models::{Dish, MealType};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Contract both backends satisfy.
///
/// Every method performs one bounded round-trip to the backing store, so a
/// caller-side timeout or a dropped future cancels the wait. Implementations
/// hold no shared mutable state beyond their pool or client and are safe for
/// concurrent use.
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// Persists a new record keyed by `dish.id`. No duplicate-id check
    /// beyond what the store enforces natively.
    async fn create_dish(&self, dish: &Dish) -> Result<(), RepositoryError>;

    /// Returns the record for `id`, or [`RepositoryError::NotFound`] if it
    /// is absent.
    async fn get_dish(&self, id: Uuid) -> Result<Dish, RepositoryError>;

    /// Full replace of the record at `id` with the supplied fields. The
    /// caller has already forced `dish.id` to `id`.
    async fn update_dish(&self, id: Uuid, dish: &Dish) -> Result<(), RepositoryError>;

    /// Removes the record at `id`.
    async fn delete_dish(&self, id: Uuid) -> Result<(), RepositoryError>;

    /// All records with the given meal type, in store-native order. Empty
    /// vec, not an error, when nothing matches.
    async fn get_dishes_by_type(
        &self,
        meal_type: MealType,
    ) -> Result<Vec<Dish>, RepositoryError>;
}

/// Constructs the backend named by `cfg.backend`, propagating any
/// construction-time connectivity error.
pub async fn new_dish_repository(
    cfg: &DatabaseConfig,
) -> Result<Arc<dyn DishRepository>, RepositoryError> {
    match cfg.backend.as_str() {
        "postgres" => {
            let pg = cfg.postgres.as_ref().ok_or_else(|| {
                RepositoryError::Configuration(
                    "postgres backend selected but the TUREEN_PG_* settings are missing"
                        .to_string(),
                )
            })?;
            Ok(Arc::new(PostgresDishRepository::connect(pg)?))
        }
        "mongo" => {
            let mongo = cfg.mongo.as_ref().ok_or_else(|| {
                RepositoryError::Configuration(
                    "mongo backend selected but the TUREEN_MONGO_* settings are missing"
                        .to_string(),
                )
            })?;
            Ok(Arc::new(MongoDishRepository::connect(mongo).await?))
        }
        other => Err(RepositoryError::Configuration(format!(
            "unsupported database backend: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend: &str) -> DatabaseConfig {
        DatabaseConfig {
            backend: backend.to_string(),
            postgres: None,
            mongo: None,
        }
    }

    #[tokio::test]
    async fn unknown_backend_is_a_configuration_error() {
        match new_dish_repository(&config("cassandra")).await {
            Err(RepositoryError::Configuration(message)) => {
                assert!(message.contains("cassandra"));
            }
            _ => panic!("expected a configuration error"),
        }
    }

    #[tokio::test]
    async fn selected_backend_without_settings_is_a_configuration_error() {
        assert!(matches!(
            new_dish_repository(&config("postgres")).await,
            Err(RepositoryError::Configuration(_))
        ));
        assert!(matches!(
            new_dish_repository(&config("mongo")).await,
            Err(RepositoryError::Configuration(_))
        ));
    }
}
