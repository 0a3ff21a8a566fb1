use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::model::RecipeSummary;
use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_cart::errors::ShoppingCartError;

pub struct AddToShoppingCartParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait AddToShoppingCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddToShoppingCartParams,
    ) -> Result<RecipeSummary, ShoppingCartError>;
}
