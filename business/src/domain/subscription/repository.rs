use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{PageRequest, UserId};
use crate::domain::user::model::Author;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn exists(&self, user_id: &UserId, author_id: &UserId) -> Result<bool, RepositoryError>;
    async fn add(&self, user_id: &UserId, author_id: &UserId) -> Result<(), RepositoryError>;
    async fn remove(&self, user_id: &UserId, author_id: &UserId) -> Result<(), RepositoryError>;
    /// Authors followed by `user_id`, ordered by author id.
    async fn get_authors(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<Vec<Author>, RepositoryError>;
    async fn count(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
}
