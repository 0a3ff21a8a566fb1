use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{PageRequest, UserId};

use super::model::{Recipe, RecipeFilter, RecipeSummary, UsedIngredient};

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get_summary(&self, id: Uuid) -> Result<RecipeSummary, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
    /// Ingredient usages of one recipe, ordered by ingredient name then id.
    async fn get_used_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<UsedIngredient>, RepositoryError>;
    /// Newest recipes first; `limit = None` returns all of them.
    async fn get_by_author(
        &self,
        author_id: &UserId,
        limit: Option<u32>,
    ) -> Result<Vec<RecipeSummary>, RepositoryError>;
    /// Newest recipes first, each recipe at most once.
    async fn search(
        &self,
        filter: &RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<Recipe>, RepositoryError>;
    async fn count(&self, filter: &RecipeFilter) -> Result<u64, RepositoryError>;
}
