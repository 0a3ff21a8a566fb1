use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::subscription::errors::SubscriptionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for SubscriptionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            SubscriptionError::AuthorNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "subscription.author_not_found",
            ),
            SubscriptionError::SelfSubscription => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "subscription.self_subscription",
            ),
            SubscriptionError::AlreadySubscribed => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "subscription.already_subscribed",
            ),
            SubscriptionError::NotSubscribed => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "subscription.not_subscribed",
            ),
            SubscriptionError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
