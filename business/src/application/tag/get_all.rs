use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::model::Tag;
use crate::domain::tag::repository::TagRepository;
use crate::domain::tag::use_cases::get_all::GetAllTagsUseCase;

pub struct GetAllTagsUseCaseImpl {
    pub repository: Arc<dyn TagRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllTagsUseCase for GetAllTagsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Tag>, TagError> {
        let tags = self.repository.get_all().await?;
        self.logger.info(&format!("Retrieved {} tags", tags.len()));
        Ok(tags)
    }
}
