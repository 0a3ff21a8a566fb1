use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::add::{AddFavoriteParams, AddFavoriteUseCase};
use crate::domain::logger::Logger;
use crate::domain::recipe::model::RecipeSummary;
use crate::domain::recipe::repository::RecipeRepository;

pub struct AddFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddFavoriteUseCase for AddFavoriteUseCaseImpl {
    async fn execute(&self, params: AddFavoriteParams) -> Result<RecipeSummary, FavoriteError> {
        self.logger.info(&format!(
            "User {} favoriting recipe {}",
            params.user_id, params.recipe_id
        ));

        let recipe = self
            .recipe_repository
            .get_summary(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FavoriteError::RecipeNotFound,
                other => FavoriteError::Repository(other),
            })?;

        if self
            .repository
            .exists(&params.user_id, params.recipe_id)
            .await?
        {
            self.logger.warn(&format!(
                "Recipe {} is already a favorite of {}",
                params.recipe_id, params.user_id
            ));
            return Err(FavoriteError::AlreadyFavorited);
        }

        // A concurrent request may have inserted the pair after the check.
        self.repository
            .add(&params.user_id, params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => FavoriteError::AlreadyFavorited,
                other => FavoriteError::Repository(other),
            })?;

        Ok(recipe)
    }
}
