use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::subscription::errors::SubscriptionError;

pub struct UnsubscribeParams {
    pub user_id: UserId,
    pub author_id: UserId,
}

#[async_trait]
pub trait UnsubscribeUseCase: Send + Sync {
    async fn execute(&self, params: UnsubscribeParams) -> Result<(), SubscriptionError>;
}
