use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::ShoppingCartEntry;

#[async_trait]
pub trait ShoppingCartRepository: Send + Sync {
    /// Cart entries of one user, oldest first (ties broken by recipe id).
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingCartEntry>, RepositoryError>;
    async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError>;
    async fn add(&self, entry: &ShoppingCartEntry) -> Result<(), RepositoryError>;
    async fn remove(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError>;
}
