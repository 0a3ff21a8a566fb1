use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::shopping_list::{AggregationLine, ShoppingListAggregator};
use crate::domain::shopping_cart::use_cases::aggregate::{
    AggregateShoppingCartParams, AggregateShoppingCartUseCase,
};

/// Walks cart entry -> recipe -> used ingredients and sums the amounts.
///
/// Entries come back oldest first and usages ordered by ingredient name, so
/// for an unchanged cart the line order is stable between calls.
pub struct AggregateShoppingCartUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AggregateShoppingCartUseCase for AggregateShoppingCartUseCaseImpl {
    async fn execute(
        &self,
        params: AggregateShoppingCartParams,
    ) -> Result<Vec<AggregationLine>, ShoppingCartError> {
        let entries = self.repository.get_all(&params.user_id).await?;
        self.logger.debug(&format!(
            "Aggregating {} cart entries for {}",
            entries.len(),
            params.user_id
        ));

        let mut aggregator = ShoppingListAggregator::new();
        for entry in &entries {
            let used = self
                .recipe_repository
                .get_used_ingredients(entry.recipe_id)
                .await?;
            aggregator.extend(&used);
        }

        let lines = aggregator.into_lines();
        self.logger.info(&format!(
            "Shopping list for {} has {} lines",
            params.user_id,
            lines.len()
        ));
        Ok(lines)
    }
}
