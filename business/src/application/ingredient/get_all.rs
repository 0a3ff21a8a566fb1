use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::get_all::{
    GetAllIngredientsParams, GetAllIngredientsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetAllIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllIngredientsUseCase for GetAllIngredientsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllIngredientsParams,
    ) -> Result<Vec<Ingredient>, IngredientError> {
        let prefix = params
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        self.logger
            .debug(&format!("Listing ingredients, name prefix: {:?}", prefix));
        let ingredients = self.repository.get_all(prefix).await?;
        self.logger
            .info(&format!("Retrieved {} ingredients", ingredients.len()));
        Ok(ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use mockall::predicate::eq;
    use uuid::Uuid;

    mock! {
        pub IngredientRepo {}

        #[async_trait]
        impl IngredientRepository for IngredientRepo {
            async fn get_all(&self, name_prefix: Option<String>) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
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

    fn ingredient(name: &str, unit: &str) -> Ingredient {
        Ingredient::from_repository(Uuid::new_v4(), name.to_string(), unit.to_string())
    }

    #[tokio::test]
    async fn should_return_all_ingredients_without_filter() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_all()
            .with(eq(None::<String>))
            .returning(|_| Ok(vec![ingredient("flour", "g"), ingredient("milk", "ml")]));

        let use_case = GetAllIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllIngredientsParams { name: None })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_pass_trimmed_prefix_to_repository() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_all()
            .with(eq(Some("fl".to_string())))
            .times(1)
            .returning(|_| Ok(vec![ingredient("flour", "g")]));

        let use_case = GetAllIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllIngredientsParams {
                name: Some("  fl ".to_string()),
            })
            .await;

        assert_eq!(result.unwrap()[0].name, "flour");
    }

    #[tokio::test]
    async fn should_ignore_blank_prefix() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_all()
            .with(eq(None::<String>))
            .times(1)
            .returning(|_| Ok(vec![]));

        let use_case = GetAllIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllIngredientsParams {
                name: Some("   ".to_string()),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetAllIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllIngredientsParams { name: None })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            IngredientError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
