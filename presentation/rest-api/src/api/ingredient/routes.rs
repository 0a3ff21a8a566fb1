use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::ingredient::use_cases::get_all::{
    GetAllIngredientsParams, GetAllIngredientsUseCase,
};
use business::domain::ingredient::use_cases::get_by_id::{
    GetIngredientByIdParams, GetIngredientByIdUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::IngredientResponse;
use crate::api::tags::ApiTags;

pub struct IngredientApi {
    get_all_use_case: Arc<dyn GetAllIngredientsUseCase>,
    get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
}

impl IngredientApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllIngredientsUseCase>,
        get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Ingredient catalogue, read only.
#[OpenApi]
impl IngredientApi {
    /// List ingredients
    ///
    /// Ordered by name. `name` keeps only ingredients starting with the given
    /// prefix, ignoring case.
    #[oai(path = "/ingredients", method = "get", tag = "ApiTags::Ingredients")]
    async fn get_all_ingredients(&self, name: Query<Option<String>>) -> GetAllIngredientsResponse {
        match self
            .get_all_use_case
            .execute(GetAllIngredientsParams { name: name.0 })
            .await
        {
            Ok(ingredients) => GetAllIngredientsResponse::Ok(Json(
                ingredients.into_iter().map(Into::into).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllIngredientsResponse::InternalError(json)
            }
        }
    }

    #[oai(path = "/ingredients/:id", method = "get", tag = "ApiTags::Ingredients")]
    async fn get_ingredient_by_id(&self, id: Path<String>) -> GetIngredientByIdResponse {
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            return GetIngredientByIdResponse::BadRequest(ErrorResponse::invalid_id("ingredient"));
        };

        match self
            .get_by_id_use_case
            .execute(GetIngredientByIdParams { id: uuid })
            .await
        {
            Ok(ingredient) => GetIngredientByIdResponse::Ok(Json(ingredient.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetIngredientByIdResponse::NotFound(json),
                    _ => GetIngredientByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IngredientResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetIngredientByIdResponse {
    #[oai(status = 200)]
    Ok(Json<IngredientResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
