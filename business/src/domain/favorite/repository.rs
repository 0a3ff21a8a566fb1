use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError>;
    async fn add(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError>;
    async fn remove(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError>;
}
