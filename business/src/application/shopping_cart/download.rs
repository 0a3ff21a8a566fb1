use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::SHOPPING_LIST_TITLE;
use crate::domain::shopping_cart::services::{ShoppingListDocument, ShoppingListRenderer};
use crate::domain::shopping_cart::shopping_list::to_text_lines;
use crate::domain::shopping_cart::use_cases::aggregate::{
    AggregateShoppingCartParams, AggregateShoppingCartUseCase,
};
use crate::domain::shopping_cart::use_cases::download::{
    DownloadShoppingCartParams, DownloadShoppingCartUseCase,
};

pub struct DownloadShoppingCartUseCaseImpl {
    pub aggregate_use_case: Arc<dyn AggregateShoppingCartUseCase>,
    pub renderer: Arc<dyn ShoppingListRenderer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DownloadShoppingCartUseCase for DownloadShoppingCartUseCaseImpl {
    async fn execute(
        &self,
        params: DownloadShoppingCartParams,
    ) -> Result<ShoppingListDocument, ShoppingCartError> {
        let user_id = params.user_id;
        let lines = self
            .aggregate_use_case
            .execute(AggregateShoppingCartParams {
                user_id: user_id.clone(),
            })
            .await?;

        let document = self
            .renderer
            .render(SHOPPING_LIST_TITLE, &to_text_lines(&lines))
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Rendering shopping list for {} failed: {}", user_id, e))
            })?;

        self.logger.info(&format!(
            "Rendered shopping list for {}: {} pages, {} bytes",
            user_id,
            document.page_count,
            document.content.len()
        ));
        Ok(document)
    }
}
