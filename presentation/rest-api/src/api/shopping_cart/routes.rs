use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Path,
    payload::{Attachment, AttachmentType, Json},
};
use uuid::Uuid;

use business::domain::shopping_cart::model::SHOPPING_LIST_FILENAME;
use business::domain::shopping_cart::use_cases::add::{
    AddToShoppingCartParams, AddToShoppingCartUseCase,
};
use business::domain::shopping_cart::use_cases::download::{
    DownloadShoppingCartParams, DownloadShoppingCartUseCase,
};
use business::domain::shopping_cart::use_cases::remove::{
    RemoveFromShoppingCartParams, RemoveFromShoppingCartUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::RecipeSummaryResponse;
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct ShoppingCartApi {
    add_use_case: Arc<dyn AddToShoppingCartUseCase>,
    remove_use_case: Arc<dyn RemoveFromShoppingCartUseCase>,
    download_use_case: Arc<dyn DownloadShoppingCartUseCase>,
}

impl ShoppingCartApi {
    pub fn new(
        add_use_case: Arc<dyn AddToShoppingCartUseCase>,
        remove_use_case: Arc<dyn RemoveFromShoppingCartUseCase>,
        download_use_case: Arc<dyn DownloadShoppingCartUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            download_use_case,
        }
    }
}

/// Shopping cart of the authenticated user.
#[OpenApi]
impl ShoppingCartApi {
    /// Download the shopping list
    ///
    /// Sums the ingredients of every recipe in the cart and returns them as a
    /// PDF attachment. An empty cart yields a one-page document.
    #[oai(
        path = "/recipes/download_shopping_cart",
        method = "get",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn download_shopping_cart(&self, auth: JwtBearer) -> DownloadShoppingCartResponse {
        match self
            .download_use_case
            .execute(DownloadShoppingCartParams { user_id: auth.0 })
            .await
        {
            Ok(document) => DownloadShoppingCartResponse::Ok(
                Attachment::new(document.content)
                    .attachment_type(AttachmentType::Attachment)
                    .filename(SHOPPING_LIST_FILENAME),
            ),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DownloadShoppingCartResponse::InternalError(json)
            }
        }
    }

    /// Add a recipe to the shopping cart
    #[oai(
        path = "/recipes/:id/shopping_cart",
        method = "post",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn add_to_shopping_cart(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> AddToShoppingCartResponse {
        let Ok(recipe_id) = Uuid::parse_str(&id.0) else {
            return AddToShoppingCartResponse::BadRequest(ErrorResponse::invalid_id("recipe"));
        };

        match self
            .add_use_case
            .execute(AddToShoppingCartParams {
                user_id: auth.0,
                recipe_id,
            })
            .await
        {
            Ok(recipe) => AddToShoppingCartResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToShoppingCartResponse::BadRequest(json),
                    404 => AddToShoppingCartResponse::NotFound(json),
                    _ => AddToShoppingCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a recipe from the shopping cart
    #[oai(
        path = "/recipes/:id/shopping_cart",
        method = "delete",
        tag = "ApiTags::ShoppingCart"
    )]
    async fn remove_from_shopping_cart(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> RemoveFromShoppingCartResponse {
        let Ok(recipe_id) = Uuid::parse_str(&id.0) else {
            return RemoveFromShoppingCartResponse::BadRequest(ErrorResponse::invalid_id("recipe"));
        };

        match self
            .remove_use_case
            .execute(RemoveFromShoppingCartParams {
                user_id: auth.0,
                recipe_id,
            })
            .await
        {
            Ok(()) => RemoveFromShoppingCartResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveFromShoppingCartResponse::BadRequest(json),
                    404 => RemoveFromShoppingCartResponse::NotFound(json),
                    _ => RemoveFromShoppingCartResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DownloadShoppingCartResponse {
    #[oai(status = 200, content_type = "application/pdf")]
    Ok(Attachment<Vec<u8>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToShoppingCartResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeSummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFromShoppingCartResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
