use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::shopping_list::AggregationLine;

pub struct AggregateShoppingCartParams {
    pub user_id: UserId,
}

/// Sums the ingredients of every recipe in a user's cart.
#[async_trait]
pub trait AggregateShoppingCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AggregateShoppingCartParams,
    ) -> Result<Vec<AggregationLine>, ShoppingCartError>;
}
