use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::recipe::errors::RecipeError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for RecipeError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            RecipeError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "recipe.not_found")
            }
            RecipeError::AmountTooSmall => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "recipe.amount_too_small",
            ),
            RecipeError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
