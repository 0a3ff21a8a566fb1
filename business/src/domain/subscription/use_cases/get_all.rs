use async_trait::async_trait;

use crate::domain::shared::value_objects::{PageRequest, UserId};
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::model::SubscriptionPage;

pub struct GetSubscriptionsParams {
    pub user_id: UserId,
    pub page: PageRequest,
    pub recipes_limit: Option<u32>,
}

#[async_trait]
pub trait GetSubscriptionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetSubscriptionsParams,
    ) -> Result<SubscriptionPage, SubscriptionError>;
}
