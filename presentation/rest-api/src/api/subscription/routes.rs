use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::shared::value_objects::{PageRequest, UserId};
use business::domain::subscription::use_cases::get_all::{
    GetSubscriptionsParams, GetSubscriptionsUseCase,
};
use business::domain::subscription::use_cases::subscribe::{SubscribeParams, SubscribeUseCase};
use business::domain::subscription::use_cases::unsubscribe::{
    UnsubscribeParams, UnsubscribeUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::subscription::dto::{AuthorResponse, SubscriptionPageResponse};
use crate::api::tags::ApiTags;

pub struct SubscriptionApi {
    subscribe_use_case: Arc<dyn SubscribeUseCase>,
    unsubscribe_use_case: Arc<dyn UnsubscribeUseCase>,
    get_all_use_case: Arc<dyn GetSubscriptionsUseCase>,
}

impl SubscriptionApi {
    pub fn new(
        subscribe_use_case: Arc<dyn SubscribeUseCase>,
        unsubscribe_use_case: Arc<dyn UnsubscribeUseCase>,
        get_all_use_case: Arc<dyn GetSubscriptionsUseCase>,
    ) -> Self {
        Self {
            subscribe_use_case,
            unsubscribe_use_case,
            get_all_use_case,
        }
    }
}

/// Following other authors.
#[OpenApi]
impl SubscriptionApi {
    /// List followed authors
    ///
    /// Paginated with `limit` and `offset`. Each author carries at most
    /// `recipes_limit` of their newest recipes.
    #[oai(path = "/users/subscriptions", method = "get", tag = "ApiTags::Subscriptions")]
    async fn get_subscriptions(
        &self,
        auth: JwtBearer,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
        recipes_limit: Query<Option<u32>>,
    ) -> GetSubscriptionsResponse {
        match self
            .get_all_use_case
            .execute(GetSubscriptionsParams {
                user_id: auth.0,
                page: PageRequest::new(limit.0, offset.0),
                recipes_limit: recipes_limit.0,
            })
            .await
        {
            Ok(page) => GetSubscriptionsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSubscriptionsResponse::InternalError(json)
            }
        }
    }

    /// Subscribe to an author
    #[oai(path = "/users/:id/subscribe", method = "post", tag = "ApiTags::Subscriptions")]
    async fn subscribe(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        recipes_limit: Query<Option<u32>>,
    ) -> SubscribeResponse {
        match self
            .subscribe_use_case
            .execute(SubscribeParams {
                user_id: auth.0,
                author_id: UserId::new(id.0),
                recipes_limit: recipes_limit.0,
            })
            .await
        {
            Ok(author) => SubscribeResponse::Ok(Json(author.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubscribeResponse::BadRequest(json),
                    404 => SubscribeResponse::NotFound(json),
                    _ => SubscribeResponse::InternalError(json),
                }
            }
        }
    }

    /// Unsubscribe from an author
    #[oai(path = "/users/:id/subscribe", method = "delete", tag = "ApiTags::Subscriptions")]
    async fn unsubscribe(&self, auth: JwtBearer, id: Path<String>) -> UnsubscribeResponse {
        match self
            .unsubscribe_use_case
            .execute(UnsubscribeParams {
                user_id: auth.0,
                author_id: UserId::new(id.0),
            })
            .await
        {
            Ok(()) => UnsubscribeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UnsubscribeResponse::BadRequest(json),
                    404 => UnsubscribeResponse::NotFound(json),
                    _ => UnsubscribeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSubscriptionsResponse {
    #[oai(status = 200)]
    Ok(Json<SubscriptionPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubscribeResponse {
    #[oai(status = 200)]
    Ok(Json<AuthorResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UnsubscribeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
