use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;

pub struct GetAllIngredientsParams {
    pub name: Option<String>,
}

#[async_trait]
pub trait GetAllIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetAllIngredientsParams,
    ) -> Result<Vec<Ingredient>, IngredientError>;
}
