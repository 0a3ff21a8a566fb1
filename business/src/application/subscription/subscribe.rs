use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::model::SubscribedAuthor;
use crate::domain::subscription::repository::SubscriptionRepository;
use crate::domain::subscription::use_cases::subscribe::{SubscribeParams, SubscribeUseCase};
use crate::domain::user::repository::UserRepository;

pub struct SubscribeUseCaseImpl {
    pub repository: Arc<dyn SubscriptionRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubscribeUseCase for SubscribeUseCaseImpl {
    async fn execute(&self, params: SubscribeParams) -> Result<SubscribedAuthor, SubscriptionError> {
        self.logger.info(&format!(
            "User {} subscribing to {}",
            params.user_id, params.author_id
        ));

        let author = self
            .user_repository
            .get_by_id(&params.author_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SubscriptionError::AuthorNotFound,
                other => SubscriptionError::Repository(other),
            })?;

        if params.user_id == params.author_id {
            return Err(SubscriptionError::SelfSubscription);
        }

        if self
            .repository
            .exists(&params.user_id, &params.author_id)
            .await?
        {
            return Err(SubscriptionError::AlreadySubscribed);
        }

        self.repository
            .add(&params.user_id, &params.author_id)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => SubscriptionError::AlreadySubscribed,
                other => SubscriptionError::Repository(other),
            })?;

        let recipes = self
            .recipe_repository
            .get_by_author(&author.id, params.recipes_limit)
            .await?;

        Ok(SubscribedAuthor {
            author,
            is_subscribed: true,
            recipes,
        })
    }
}
