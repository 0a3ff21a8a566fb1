use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::get_by_id::{
    GetIngredientByIdParams, GetIngredientByIdUseCase,
};
use crate::domain::logger::Logger;

pub struct GetIngredientByIdUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetIngredientByIdUseCase for GetIngredientByIdUseCaseImpl {
    async fn execute(&self, params: GetIngredientByIdParams) -> Result<Ingredient, IngredientError> {
        self.logger
            .info(&format!("Getting ingredient: {}", params.id));
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => IngredientError::NotFound,
                other => IngredientError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
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

    #[tokio::test]
    async fn should_return_ingredient_when_found() {
        let id = Uuid::new_v4();
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_get_by_id().returning(move |id| {
            Ok(Ingredient::from_repository(
                id,
                "butter".to_string(),
                "g".to_string(),
            ))
        });

        let use_case = GetIngredientByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let ingredient = use_case
            .execute(GetIngredientByIdParams { id })
            .await
            .unwrap();

        assert_eq!(ingredient.id, id);
        assert_eq!(ingredient.measurement_unit, "g");
    }

    #[tokio::test]
    async fn should_map_missing_ingredient_to_not_found() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetIngredientByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetIngredientByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), IngredientError::NotFound));
    }
}
