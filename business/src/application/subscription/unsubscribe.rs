use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::repository::SubscriptionRepository;
use crate::domain::subscription::use_cases::unsubscribe::{UnsubscribeParams, UnsubscribeUseCase};
use crate::domain::user::repository::UserRepository;

pub struct UnsubscribeUseCaseImpl {
    pub repository: Arc<dyn SubscriptionRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UnsubscribeUseCase for UnsubscribeUseCaseImpl {
    async fn execute(&self, params: UnsubscribeParams) -> Result<(), SubscriptionError> {
        self.logger.info(&format!(
            "User {} unsubscribing from {}",
            params.user_id, params.author_id
        ));

        self.user_repository
            .get_by_id(&params.author_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SubscriptionError::AuthorNotFound,
                other => SubscriptionError::Repository(other),
            })?;

        if !self
            .repository
            .exists(&params.user_id, &params.author_id)
            .await?
        {
            return Err(SubscriptionError::NotSubscribed);
        }

        self.repository
            .remove(&params.user_id, &params.author_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SubscriptionError::NotSubscribed,
                other => SubscriptionError::Repository(other),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::{PageRequest, UserId};
    use crate::domain::user::model::Author;
    use mockall::mock;

    mock! {
        pub SubscriptionRepo {}

        #[async_trait]
        impl SubscriptionRepository for SubscriptionRepo {
            async fn exists(&self, user_id: &UserId, author_id: &UserId) -> Result<bool, RepositoryError>;
            async fn add(&self, user_id: &UserId, author_id: &UserId) -> Result<(), RepositoryError>;
            async fn remove(&self, user_id: &UserId, author_id: &UserId) -> Result<(), RepositoryError>;
            async fn get_authors(&self, user_id: &UserId, page: PageRequest) -> Result<Vec<Author>, RepositoryError>;
            async fn count(&self, user_id: &UserId) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_by_id(&self, id: &UserId) -> Result<Author, RepositoryError>;
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

    fn users() -> MockUserRepo {
        let mut repo = MockUserRepo::new();
        repo.expect_get_by_id().returning(|id| {
            Ok(Author::from_repository(
                id.clone(),
                "chef".to_string(),
                "chef@example.com".to_string(),
                "Gordon".to_string(),
                "Chef".to_string(),
            ))
        });
        repo
    }

    fn params() -> UnsubscribeParams {
        UnsubscribeParams {
            user_id: UserId::new("reader"),
            author_id: UserId::new("chef"),
        }
    }

    #[tokio::test]
    async fn should_unsubscribe_when_subscribed() {
        let mut subscriptions = MockSubscriptionRepo::new();
        subscriptions.expect_exists().returning(|_, _| Ok(true));
        subscriptions.expect_remove().times(1).returning(|_, _| Ok(()));

        let use_case = UnsubscribeUseCaseImpl {
            repository: Arc::new(subscriptions),
            user_repository: Arc::new(users()),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params()).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_when_not_subscribed() {
        let mut subscriptions = MockSubscriptionRepo::new();
        subscriptions.expect_exists().returning(|_, _| Ok(false));
        subscriptions.expect_remove().never();

        let use_case = UnsubscribeUseCaseImpl {
            repository: Arc::new(subscriptions),
            user_repository: Arc::new(users()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), SubscriptionError::NotSubscribed));
    }

    #[tokio::test]
    async fn should_report_not_subscribed_when_follow_vanishes_before_delete() {
        let mut subscriptions = MockSubscriptionRepo::new();
        subscriptions.expect_exists().returning(|_, _| Ok(true));
        subscriptions
            .expect_remove()
            .times(1)
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = UnsubscribeUseCaseImpl {
            repository: Arc::new(subscriptions),
            user_repository: Arc::new(users()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), SubscriptionError::NotSubscribed));
    }
}
