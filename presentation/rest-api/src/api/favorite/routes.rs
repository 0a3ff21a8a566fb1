use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use business::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::RecipeSummaryResponse;
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct FavoriteApi {
    add_use_case: Arc<dyn AddFavoriteUseCase>,
    remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
}

impl FavoriteApi {
    pub fn new(
        add_use_case: Arc<dyn AddFavoriteUseCase>,
        remove_use_case: Arc<dyn RemoveFavoriteUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
        }
    }
}

#[OpenApi]
impl FavoriteApi {
    /// Add a recipe to favorites
    #[oai(path = "/recipes/:id/favorite", method = "post", tag = "ApiTags::Favorites")]
    async fn add_favorite(&self, auth: JwtBearer, id: Path<String>) -> AddFavoriteResponse {
        let Ok(recipe_id) = Uuid::parse_str(&id.0) else {
            return AddFavoriteResponse::BadRequest(ErrorResponse::invalid_id("recipe"));
        };

        match self
            .add_use_case
            .execute(AddFavoriteParams {
                user_id: auth.0,
                recipe_id,
            })
            .await
        {
            Ok(recipe) => AddFavoriteResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddFavoriteResponse::BadRequest(json),
                    404 => AddFavoriteResponse::NotFound(json),
                    _ => AddFavoriteResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a recipe from favorites
    #[oai(path = "/recipes/:id/favorite", method = "delete", tag = "ApiTags::Favorites")]
    async fn remove_favorite(&self, auth: JwtBearer, id: Path<String>) -> RemoveFavoriteResponse {
        let Ok(recipe_id) = Uuid::parse_str(&id.0) else {
            return RemoveFavoriteResponse::BadRequest(ErrorResponse::invalid_id("recipe"));
        };

        match self
            .remove_use_case
            .execute(RemoveFavoriteParams {
                user_id: auth.0,
                recipe_id,
            })
            .await
        {
            Ok(()) => RemoveFavoriteResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveFavoriteResponse::BadRequest(json),
                    404 => RemoveFavoriteResponse::NotFound(json),
                    _ => RemoveFavoriteResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddFavoriteResponse {
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
pub enum RemoveFavoriteResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
