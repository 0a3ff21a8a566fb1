use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipePage;
use crate::domain::shared::value_objects::{PageRequest, UserId};

pub struct GetRecipesParams {
    /// `None` for anonymous requests.
    pub viewer: Option<UserId>,
    pub author_id: Option<UserId>,
    pub tag_slugs: Vec<String>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub page: PageRequest,
}

#[async_trait]
pub trait GetRecipesUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipesParams) -> Result<RecipePage, RecipeError>;
}
