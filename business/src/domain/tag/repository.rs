use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Tag;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Tag>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Tag, RepositoryError>;
    /// Tags of one recipe, ordered by name.
    async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<Tag>, RepositoryError>;
}
