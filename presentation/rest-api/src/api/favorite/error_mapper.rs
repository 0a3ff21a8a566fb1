use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::favorite::errors::FavoriteError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            FavoriteError::RecipeNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "favorite.recipe_not_found")
            }
            FavoriteError::AlreadyFavorited => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "favorite.already_favorited",
            ),
            FavoriteError::NotFavorited => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "favorite.not_favorited",
            ),
            FavoriteError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
