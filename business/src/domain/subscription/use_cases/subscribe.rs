use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::model::SubscribedAuthor;

pub struct SubscribeParams {
    pub user_id: UserId,
    pub author_id: UserId,
    pub recipes_limit: Option<u32>,
}

#[async_trait]
pub trait SubscribeUseCase: Send + Sync {
    async fn execute(&self, params: SubscribeParams) -> Result<SubscribedAuthor, SubscriptionError>;
}
