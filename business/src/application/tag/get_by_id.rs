use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::model::Tag;
use crate::domain::tag::repository::TagRepository;
use crate::domain::tag::use_cases::get_by_id::{GetTagByIdParams, GetTagByIdUseCase};

pub struct GetTagByIdUseCaseImpl {
    pub repository: Arc<dyn TagRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTagByIdUseCase for GetTagByIdUseCaseImpl {
    async fn execute(&self, params: GetTagByIdParams) -> Result<Tag, TagError> {
        self.logger.info(&format!("Getting tag: {}", params.id));
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => TagError::NotFound,
                other => TagError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub TagRepo {}

        #[async_trait]
        impl TagRepository for TagRepo {
            async fn get_all(&self) -> Result<Vec<Tag>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Tag, RepositoryError>;
            async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<Tag>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_tag_when_found() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockTagRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            Ok(Tag::from_repository(
                id,
                "Lunch".to_string(),
                "lunch".to_string(),
                "#8775D2".to_string(),
            ))
        });

        let use_case = GetTagByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let tag = use_case.execute(GetTagByIdParams { id }).await.unwrap();

        assert_eq!(tag.id, id);
        assert_eq!(tag.color, "#8775D2");
    }

    #[tokio::test]
    async fn should_map_missing_tag_to_not_found() {
        let mut mock_repo = MockTagRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetTagByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetTagByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), TagError::NotFound));
    }
}
