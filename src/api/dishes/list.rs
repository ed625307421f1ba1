use crate::api::ErrorResponse;
use crate::models::{Dish, MealType};
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListDishesParams {
    /// Meal type to filter by: breakfast, brunch, lunch, dinner, supper or
    /// snack.
    #[serde(rename = "type")]
    pub meal_type: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/dishes/",
    tag = "dishes",
    params(ListDishesParams),
    responses(
        (status = 200, description = "Dishes with the requested meal type", body = [Dish]),
        (status = 400, description = "Invalid or missing meal type", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
pub async fn get_dishes_by_type(
    State(repo): State<AppState>,
    Query(params): Query<ListDishesParams>,
) -> impl IntoResponse {
    let Some(meal_type) = MealType::parse(&params.meal_type) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Invalid meal type".to_string(),
            }),
        )
            .into_response();
    };

    match repo.get_dishes_by_type(meal_type).await {
        Ok(dishes) => (StatusCode::OK, Json(dishes)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list {} dishes: {}", meal_type, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list dishes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
