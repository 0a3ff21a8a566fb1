use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::model::RecipeSummary;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::ShoppingCartEntry;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::add::{
    AddToShoppingCartParams, AddToShoppingCartUseCase,
};

pub struct AddToShoppingCartUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToShoppingCartUseCase for AddToShoppingCartUseCaseImpl {
    async fn execute(
        &self,
        params: AddToShoppingCartParams,
    ) -> Result<RecipeSummary, ShoppingCartError> {
        self.logger.info(&format!(
            "Adding recipe {} to shopping cart of {}",
            params.recipe_id, params.user_id
        ));

        let recipe = self
            .recipe_repository
            .get_summary(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingCartError::RecipeNotFound,
                other => ShoppingCartError::Repository(other),
            })?;

        if self
            .repository
            .exists(&params.user_id, params.recipe_id)
            .await?
        {
            self.logger.warn(&format!(
                "Recipe {} already in shopping cart of {}",
                params.recipe_id, params.user_id
            ));
            return Err(ShoppingCartError::AlreadyInCart);
        }

        let entry = ShoppingCartEntry::new(params.user_id, params.recipe_id);
        self.repository.add(&entry).await.map_err(|e| match e {
            RepositoryError::Duplicated => ShoppingCartError::AlreadyInCart,
            other => ShoppingCartError::Repository(other),
        })?;

        Ok(recipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::model::{Recipe, RecipeFilter, UsedIngredient};
    use crate::domain::shared::value_objects::{PageRequest, UserId};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl ShoppingCartRepository for CartRepo {
            async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingCartEntry>, RepositoryError>;
            async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError>;
            async fn add(&self, entry: &ShoppingCartEntry) -> Result<(), RepositoryError>;
            async fn remove(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_summary(&self, id: Uuid) -> Result<RecipeSummary, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
            async fn get_used_ingredients(&self, recipe_id: Uuid) -> Result<Vec<UsedIngredient>, RepositoryError>;
            async fn get_by_author(&self, author_id: &UserId, limit: Option<u32>) -> Result<Vec<RecipeSummary>, RepositoryError>;
            async fn search(&self, filter: &RecipeFilter, page: PageRequest) -> Result<Vec<Recipe>, RepositoryError>;
            async fn count(&self, filter: &RecipeFilter) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing_recipe() -> MockRecipeRepo {
        let mut repo = MockRecipeRepo::new();
        repo.expect_get_summary().returning(|id| {
            Ok(RecipeSummary::from_repository(
                id,
                UserId::new("author"),
                "Pancakes".to_string(),
                None,
                15,
            ))
        });
        repo
    }

    #[tokio::test]
    async fn should_add_recipe_to_cart() {
        let user_id = UserId::new("buyer");
        let recipe_id = Uuid::new_v4();
        let expected_user = user_id.clone();

        let mut cart = MockCartRepo::new();
        cart.expect_exists().returning(|_, _| Ok(false));
        cart.expect_add()
            .withf(move |entry| entry.user_id == expected_user && entry.recipe_id == recipe_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = AddToShoppingCartUseCaseImpl {
            repository: Arc::new(cart),
            recipe_repository: Arc::new(existing_recipe()),
            logger: mock_logger(),
        };

        let recipe = use_case
            .execute(AddToShoppingCartParams { user_id, recipe_id })
            .await
            .unwrap();

        assert_eq!(recipe.id, recipe_id);
    }

    #[tokio::test]
    async fn should_reject_recipe_already_in_cart() {
        let mut cart = MockCartRepo::new();
        cart.expect_exists().returning(|_, _| Ok(true));
        cart.expect_add().never();

        let use_case = AddToShoppingCartUseCaseImpl {
            repository: Arc::new(cart),
            recipe_repository: Arc::new(existing_recipe()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToShoppingCartParams {
                user_id: UserId::new("buyer"),
                recipe_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingCartError::AlreadyInCart));
    }

    #[tokio::test]
    async fn should_return_recipe_not_found_for_unknown_recipe() {
        let mut recipes = MockRecipeRepo::new();
        recipes
            .expect_get_summary()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddToShoppingCartUseCaseImpl {
            repository: Arc::new(MockCartRepo::new()),
            recipe_repository: Arc::new(recipes),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddToShoppingCartParams {
                user_id: UserId::new("buyer"),
                recipe_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ShoppingCartError::RecipeNotFound));
    }
}
