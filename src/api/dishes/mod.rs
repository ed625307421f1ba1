pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for dish endpoints (mounted at /api/v1/dishes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list::get_dishes_by_type).post(create::create_dish),
        )
        .route(
            "/{id}",
            get(get::get_dish)
                .put(update::update_dish)
                .delete(delete::delete_dish),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_dish,
        list::get_dishes_by_type,
        get::get_dish,
        update::update_dish,
        delete::delete_dish,
    ),
    components(schemas(create::CreateDishRequest, update::UpdateDishRequest))
)]
pub struct ApiDoc;
