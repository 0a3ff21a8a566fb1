use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::remove::{RemoveFavoriteParams, RemoveFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;

pub struct RemoveFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFavoriteUseCase for RemoveFavoriteUseCaseImpl {
    async fn execute(&self, params: RemoveFavoriteParams) -> Result<(), FavoriteError> {
        self.logger.info(&format!(
            "User {} removing favorite recipe {}",
            params.user_id, params.recipe_id
        ));

        self.recipe_repository
            .get_summary(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FavoriteError::RecipeNotFound,
                other => FavoriteError::Repository(other),
            })?;

        if !self
            .repository
            .exists(&params.user_id, params.recipe_id)
            .await?
        {
            return Err(FavoriteError::NotFavorited);
        }

        self.repository
            .remove(&params.user_id, params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FavoriteError::NotFavorited,
                other => FavoriteError::Repository(other),
            })?;
        Ok(())
    }
}
