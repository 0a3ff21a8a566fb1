use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::recipe::model::RecipeSummary;
use crate::domain::shared::value_objects::UserId;

pub struct AddFavoriteParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
}

#[async_trait]
pub trait AddFavoriteUseCase: Send + Sync {
    async fn execute(&self, params: AddFavoriteParams) -> Result<RecipeSummary, FavoriteError>;
}
