use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::model::{SubscribedAuthor, SubscriptionPage};
use crate::domain::subscription::repository::SubscriptionRepository;
use crate::domain::subscription::use_cases::get_all::{
    GetSubscriptionsParams, GetSubscriptionsUseCase,
};

pub struct GetSubscriptionsUseCaseImpl {
    pub repository: Arc<dyn SubscriptionRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSubscriptionsUseCase for GetSubscriptionsUseCaseImpl {
    async fn execute(
        &self,
        params: GetSubscriptionsParams,
    ) -> Result<SubscriptionPage, SubscriptionError> {
        let count = self.repository.count(&params.user_id).await?;
        let authors = self
            .repository
            .get_authors(&params.user_id, params.page)
            .await?;

        let mut subscribed = Vec::with_capacity(authors.len());
        for author in authors {
            let recipes = self
                .recipe_repository
                .get_by_author(&author.id, params.recipes_limit)
                .await?;
            subscribed.push(SubscribedAuthor {
                author,
                is_subscribed: true,
                recipes,
            });
        }

        self.logger.info(&format!(
            "Retrieved {} of {} subscriptions for {}",
            subscribed.len(),
            count,
            params.user_id
        ));
        Ok(SubscriptionPage {
            count,
            authors: subscribed,
        })
    }
}
