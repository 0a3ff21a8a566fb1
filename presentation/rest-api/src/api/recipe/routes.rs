use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::recipe::use_cases::get_all::{GetRecipesParams, GetRecipesUseCase};
use business::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};
use business::domain::shared::value_objects::{PageRequest, UserId};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{RecipePageResponse, RecipeResponse};
use crate::api::security::optional_viewer;
use crate::api::tags::ApiTags;

/// Query flags accept `1` and `true`; anything else leaves the filter off.
fn is_set(flag: Option<&str>) -> bool {
    matches!(flag, Some("1" | "true" | "True"))
}

fn unauthorized(reason: String) -> Json<ErrorResponse> {
    tracing::warn!("Rejected recipe read: {reason}");
    Json(ErrorResponse::new("Unauthorized", "auth.invalid_token"))
}

pub struct RecipeApi {
    get_all_use_case: Arc<dyn GetRecipesUseCase>,
    get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
}

impl RecipeApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetRecipesUseCase>,
        get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Public recipe listing. A bearer token is optional and only fills the
/// viewer's flags.
#[OpenApi]
impl RecipeApi {
    /// List recipes
    ///
    /// Newest first, paginated with `limit` and `offset`. `tags` may be
    /// repeated and matches any of the slugs. `is_favorited` and
    /// `is_in_shopping_cart` restrict the list to the viewer's recipes.
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/recipes", method = "get", tag = "ApiTags::Recipes")]
    async fn get_recipes(
        &self,
        req: &Request,
        limit: Query<Option<u32>>,
        offset: Query<Option<u32>>,
        author: Query<Option<String>>,
        tags: Query<Option<Vec<String>>>,
        is_favorited: Query<Option<String>>,
        is_in_shopping_cart: Query<Option<String>>,
    ) -> GetRecipesResponse {
        let viewer = match optional_viewer(req) {
            Ok(viewer) => viewer,
            Err(reason) => return GetRecipesResponse::Unauthorized(unauthorized(reason)),
        };

        match self
            .get_all_use_case
            .execute(GetRecipesParams {
                viewer,
                author_id: author.0.map(UserId::new),
                tag_slugs: tags.0.unwrap_or_default(),
                is_favorited: is_set(is_favorited.0.as_deref()),
                is_in_shopping_cart: is_set(is_in_shopping_cart.0.as_deref()),
                page: PageRequest::new(limit.0, offset.0),
            })
            .await
        {
            Ok(page) => GetRecipesResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetRecipesResponse::InternalError(json)
            }
        }
    }

    /// Get a recipe by ID
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_recipe(&self, req: &Request, id: Path<String>) -> GetRecipeResponse {
        let Ok(recipe_id) = Uuid::parse_str(&id.0) else {
            return GetRecipeResponse::BadRequest(ErrorResponse::invalid_id("recipe"));
        };
        let viewer = match optional_viewer(req) {
            Ok(viewer) => viewer,
            Err(reason) => return GetRecipeResponse::Unauthorized(unauthorized(reason)),
        };

        match self
            .get_by_id_use_case
            .execute(GetRecipeByIdParams {
                id: recipe_id,
                viewer,
            })
            .await
        {
            Ok(details) => GetRecipeResponse::Ok(Json(details.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecipeResponse::NotFound(json),
                    _ => GetRecipeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<RecipePageResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::recipe::errors::RecipeError;
    use business::domain::recipe::model::{Recipe, RecipeDetails, RecipePage, RecipeSummary};
    use business::domain::user::model::Author;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use mockall::mock;
    use poem::{EndpointExt, Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;

    use crate::config::jwt_config::JwtConfig;

    const SECRET: &str = "recipe-secret";

    mock! {
        pub GetAllUseCase {}

        #[async_trait]
        impl GetRecipesUseCase for GetAllUseCase {
            async fn execute(&self, params: GetRecipesParams) -> Result<RecipePage, RecipeError>;
        }
    }

    mock! {
        pub GetByIdUseCase {}

        #[async_trait]
        impl GetRecipeByIdUseCase for GetByIdUseCase {
            async fn execute(&self, params: GetRecipeByIdParams) -> Result<RecipeDetails, RecipeError>;
        }
    }

    fn bearer(user_id: &str) -> String {
        #[derive(serde::Serialize)]
        struct Claims<'a> {
            user_id: &'a str,
            exp: u64,
        }

        let token = encode(
            &Header::default(),
            &Claims {
                user_id,
                exp: chrono::Utc::now().timestamp() as u64 + 3600,
            },
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        format!("Bearer {}", token)
    }

    fn details(id: Uuid, is_favorited: bool) -> RecipeDetails {
        let author_id = UserId::new("chef");
        RecipeDetails {
            recipe: Recipe {
                summary: RecipeSummary::from_repository(
                    id,
                    author_id.clone(),
                    "Borscht".to_string(),
                    None,
                    90,
                ),
                text: "Boil the beets.".to_string(),
            },
            author: Author::from_repository(
                author_id,
                "chef".to_string(),
                "chef@example.com".to_string(),
                "Anna".to_string(),
                "Cook".to_string(),
            ),
            is_subscribed_to_author: false,
            tags: Vec::new(),
            ingredients: Vec::new(),
            is_favorited,
            is_in_shopping_cart: false,
        }
    }

    fn client(
        get_all: MockGetAllUseCase,
        get_by_id: MockGetByIdUseCase,
    ) -> TestClient<impl poem::Endpoint> {
        let api = RecipeApi::new(Arc::new(get_all), Arc::new(get_by_id));
        let service = OpenApiService::new(api, "test", "0.0.0");
        TestClient::new(
            Route::new()
                .nest("/api", service)
                .data(JwtConfig::new(SECRET)),
        )
    }

    #[test]
    fn should_accept_numeric_and_boolean_flags() {
        assert!(is_set(Some("1")));
        assert!(is_set(Some("true")));
        assert!(!is_set(Some("0")));
        assert!(!is_set(None));
    }

    #[tokio::test]
    async fn should_list_recipes_for_anonymous_viewer() {
        let mut get_all = MockGetAllUseCase::new();
        get_all
            .expect_execute()
            .withf(|params| params.viewer.is_none() && params.page.limit == 6)
            .returning(|_| {
                Ok(RecipePage {
                    count: 1,
                    recipes: vec![details(Uuid::new_v4(), false)],
                })
            });

        let cli = client(get_all, MockGetByIdUseCase::new());
        let resp = cli.get("/api/recipes").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("count").assert_i64(1);
        body.get("response").array().assert_len(1);
    }

    #[tokio::test]
    async fn should_pass_filters_and_viewer_to_listing() {
        let mut get_all = MockGetAllUseCase::new();
        get_all
            .expect_execute()
            .withf(|params| {
                params.viewer == Some(UserId::new("reader"))
                    && params.author_id == Some(UserId::new("chef"))
                    && params.tag_slugs == vec!["breakfast".to_string(), "lunch".to_string()]
                    && params.is_favorited
                    && !params.is_in_shopping_cart
                    && params.page == PageRequest::new(Some(2), Some(4))
            })
            .returning(|_| {
                Ok(RecipePage {
                    count: 0,
                    recipes: Vec::new(),
                })
            });

        let cli = client(get_all, MockGetByIdUseCase::new());
        let resp = cli
            .get("/api/recipes?limit=2&offset=4&author=chef&tags=breakfast&tags=lunch&is_favorited=1")
            .header("Authorization", bearer("reader"))
            .send()
            .await;

        resp.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_reject_listing_with_invalid_token() {
        let mut get_all = MockGetAllUseCase::new();
        get_all.expect_execute().never();

        let cli = client(get_all, MockGetByIdUseCase::new());
        let resp = cli
            .get("/api/recipes")
            .header("Authorization", "Bearer not-a-jwt")
            .send()
            .await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_return_recipe_with_viewer_flags() {
        let id = Uuid::new_v4();
        let mut get_by_id = MockGetByIdUseCase::new();
        get_by_id
            .expect_execute()
            .withf(move |params| params.id == id && params.viewer == Some(UserId::new("reader")))
            .returning(|params| Ok(details(params.id, true)));

        let cli = client(MockGetAllUseCase::new(), get_by_id);
        let resp = cli
            .get(format!("/api/recipes/{}", id))
            .header("Authorization", bearer("reader"))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("is_favorited").assert_bool(true);
        body.get("text").assert_string("Boil the beets.");
        body.get("author").object().get("username").assert_string("chef");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_recipe() {
        let mut get_by_id = MockGetByIdUseCase::new();
        get_by_id
            .expect_execute()
            .returning(|_| Err(RecipeError::NotFound));

        let cli = client(MockGetAllUseCase::new(), get_by_id);
        let resp = cli
            .get(format!("/api/recipes/{}", Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_malformed_recipe_id() {
        let mut get_by_id = MockGetByIdUseCase::new();
        get_by_id.expect_execute().never();

        let cli = client(MockGetAllUseCase::new(), get_by_id);
        let resp = cli.get("/api/recipes/not-a-uuid").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }
}
