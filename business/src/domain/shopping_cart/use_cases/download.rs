use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::services::ShoppingListDocument;

pub struct DownloadShoppingCartParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait DownloadShoppingCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: DownloadShoppingCartParams,
    ) -> Result<ShoppingListDocument, ShoppingCartError>;
}
