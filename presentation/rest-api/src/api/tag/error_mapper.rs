use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::tag::errors::TagError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for TagError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            TagError::NotFound => error_response(StatusCode::NOT_FOUND, "NotFound", "tag.not_found"),
            TagError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
