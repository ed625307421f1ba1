use crate::api::ErrorResponse;
use crate::models::{Dish, Ingredient, MealType, Nutrition};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// A dish as submitted by the client: everything but the id.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateDishRequest {
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

impl CreateDishRequest {
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
    post,
    path = "/api/v1/dishes/",
    tag = "dishes",
    request_body = CreateDishRequest,
    responses(
        (status = 201, description = "Dish created successfully", body = Dish),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
pub async fn create_dish(
    State(repo): State<AppState>,
    Json(request): Json<CreateDishRequest>,
) -> impl IntoResponse {
    // Ids are assigned here, never taken from the client.
    let dish = request.into_dish(Uuid::new_v4());

    match repo.create_dish(&dish).await {
        Ok(()) => (StatusCode::CREATED, Json(dish)).into_response(),
        Err(e) => {
            tracing::error!("Failed to create dish {}: {}", dish.id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create dish".to_string(),
                }),
            )
                .into_response()
        }
    }
}
