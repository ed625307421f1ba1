use crate::api::ErrorResponse;
use crate::repo::RepositoryError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/v1/dishes/{id}",
    tag = "dishes",
    params(
        ("id" = Uuid, Path, description = "Dish ID")
    ),
    responses(
        (status = 204, description = "Dish deleted"),
        (status = 400, description = "Invalid id format", body = ErrorResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    )
)]
pub async fn delete_dish(State(repo): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match repo.delete_dish(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(RepositoryError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Dish not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to delete dish {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete dish".to_string(),
                }),
            )
                .into_response()
        }
    }
}
