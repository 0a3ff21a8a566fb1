use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_cart::errors::ShoppingCartError;

pub struct RemoveFromShoppingCartParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait RemoveFromShoppingCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveFromShoppingCartParams) -> Result<(), ShoppingCartError>;
}
