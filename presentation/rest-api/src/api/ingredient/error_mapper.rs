use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::ingredient::errors::IngredientError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for IngredientError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            IngredientError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "ingredient.not_found")
            }
            IngredientError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
