use crate::api::ErrorResponse;
use crate::models::{Dish, Ingredient, MealType, Nutrition};
use crate::repo::RepositoryError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// The full replacement for a dish. Any id in the body is ignored; the path
/// id wins.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateDishRequest {
    pub name: String,
    pub recipe: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    pub nutrition: Nutrition,
    pub meal_type: MealType,
    pub cooking_time: i32,
    pub servings: i32,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl UpdateDishRequest {
    fn into_dish(self, id: Uuid) -> Dish {
        Dish {
            id,
            name: self.name,
            recipe: self.recipe,
            ingredients: self.ingredients,
            nutrition: self.nutrition,
            meal_type: self.meal_type,
            cooking_time: self.cooking_time,
            servings: self.servings,
            tags: self.tags,
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/dishes/{id}",
    tag = "dishes",
    params(
        ("id" = Uuid, Path, description = "Dish ID")
    ),
    request_body = UpdateDishRequest,
    responses(
        (status = 200, description = "Dish replaced", body = Dish),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
pub async fn update_dish(
    State(repo): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDishRequest>,
) -> impl IntoResponse {
    let dish = request.into_dish(id);

    match repo.update_dish(id, &dish).await {
        Ok(()) => (StatusCode::OK, Json(dish)).into_response(),
        Err(RepositoryError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Dish not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to update dish {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update dish".to_string(),
                }),
            )
                .into_response()
        }
    }
}
