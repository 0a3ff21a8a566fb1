use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_cart::errors::ShoppingCartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for ShoppingCartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ShoppingCartError::RecipeNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "shopping_cart.recipe_not_found",
            ),
            ShoppingCartError::AlreadyInCart => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_cart.already_in_cart",
            ),
            ShoppingCartError::NotInCart => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "shopping_cart.not_in_cart",
            ),
            // The renderer detail is logged by the use case, not exposed.
            ShoppingCartError::Rendering(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "RenderingError",
                "shopping_cart.rendering_failed",
            ),
            ShoppingCartError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_toggle_conflicts_to_bad_request() {
        let (status, body) = ShoppingCartError::AlreadyInCart.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.message, "shopping_cart.already_in_cart");
    }

    #[test]
    fn should_hide_rendering_details() {
        let (status, body) =
            ShoppingCartError::Rendering("font table broken".to_string()).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "shopping_cart.rendering_failed");
    }

    #[test]
    fn should_map_repository_failure_to_internal_error() {
        let (status, body) =
            ShoppingCartError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "repository.persistence");
    }
}
