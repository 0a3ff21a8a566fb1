use async_trait::async_trait;

use crate::domain::tag::errors::TagError;
use crate::domain::tag::model::Tag;

#[async_trait]
pub trait GetAllTagsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Tag>, TagError>;
}
