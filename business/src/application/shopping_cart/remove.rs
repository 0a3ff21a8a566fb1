use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::remove::{
    RemoveFromShoppingCartParams, RemoveFromShoppingCartUseCase,
};

pub struct RemoveFromShoppingCartUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromShoppingCartUseCase for RemoveFromShoppingCartUseCaseImpl {
    async fn execute(&self, params: RemoveFromShoppingCartParams) -> Result<(), ShoppingCartError> {
        self.logger.info(&format!(
            "Removing recipe {} from shopping cart of {}",
            params.recipe_id, params.user_id
        ));

        self.recipe_repository
            .get_summary(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingCartError::RecipeNotFound,
                other => ShoppingCartError::Repository(other),
            })?;

        if !self
            .repository
            .exists(&params.user_id, params.recipe_id)
            .await?
        {
            return Err(ShoppingCartError::NotInCart);
        }

        self.repository
            .remove(&params.user_id, params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingCartError::NotInCart,
                other => ShoppingCartError::Repository(other),
            })?;
        Ok(())
    }
}
