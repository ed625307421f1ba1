pub mod dishes;

use crate::models::{Dish, Ingredient, MealType, Nutrition};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse, Dish, Ingredient, Nutrition, MealType)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();
    spec.merge(dishes::ApiDoc::openapi());
    spec
}
