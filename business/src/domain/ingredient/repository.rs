use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Ingredient;

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Lists ingredients ordered by name, optionally keeping only those whose
    /// name starts with `name_prefix` (case-insensitive).
    async fn get_all(&self, name_prefix: Option<String>)
    -> Result<Vec<Ingredient>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
}
