use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::{RecipeFilter, RecipePage};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_all::{GetRecipesParams, GetRecipesUseCase};

use super::details::RecipeDetailsLoader;

pub struct GetRecipesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub details_loader: Arc<RecipeDetailsLoader>,
    pub logger: Arc<dyn Logger>,
}

impl GetRecipesUseCaseImpl {
    /// `None` when a viewer-only filter is asked for without a viewer: such
    /// a listing is always empty.
    fn build_filter(params: &GetRecipesParams) -> Option<RecipeFilter> {
        let viewer = params.viewer.as_ref();
        if (params.is_favorited || params.is_in_shopping_cart) && viewer.is_none() {
            return None;
        }

        Some(RecipeFilter {
            author_id: params.author_id.clone(),
            tag_slugs: params.tag_slugs.clone(),
            favorited_by: viewer.filter(|_| params.is_favorited).cloned(),
            in_cart_of: viewer.filter(|_| params.is_in_shopping_cart).cloned(),
        })
    }
}

#[async_trait]
impl GetRecipesUseCase for GetRecipesUseCaseImpl {
    async fn execute(&self, params: GetRecipesParams) -> Result<RecipePage, RecipeError> {
        let Some(filter) = Self::build_filter(&params) else {
            self.logger
                .debug("Anonymous request filtered on favorites or cart, returning no recipes");
            return Ok(RecipePage {
                count: 0,
                recipes: Vec::new(),
            });
        };

        let count = self.repository.count(&filter).await?;
        let recipes = self.repository.search(&filter, params.page).await?;

        let mut details = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            details.push(
                self.details_loader
                    .load(recipe, params.viewer.as_ref())
                    .await?,
            );
        }

        self.logger.info(&format!(
            "Retrieved {} of {} recipes",
            details.len(),
            count
        ));
        Ok(RecipePage {
            count,
            recipes: details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::recipe::details::mocks::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::{PageRequest, UserId};
    use mockall::mock;
    use mockall::predicate::eq;

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

    fn params(viewer: Option<&str>) -> GetRecipesParams {
        GetRecipesParams {
            viewer: viewer.map(UserId::new),
            author_id: None,
            tag_slugs: Vec::new(),
            is_favorited: false,
            is_in_shopping_cart: false,
            page: PageRequest::new(None, None),
        }
    }

    fn use_case(search_repo: MockRecipeRepo) -> GetRecipesUseCaseImpl {
        GetRecipesUseCaseImpl {
            repository: Arc::new(search_repo),
            details_loader: Arc::new(loader(recipe_repo_with_ingredients(), true)),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_page_with_total_count() {
        let mut recipes = MockRecipeRepo::new();
        recipes.expect_count().returning(|_| Ok(12));
        recipes
            .expect_search()
            .withf(|filter, page| *filter == RecipeFilter::default() && page.limit == 6)
            .returning(|_, _| Ok(vec![recipe("Borscht", "chef"), recipe("Pelmeni", "chef")]));

        let page = use_case(recipes).execute(params(None)).await.unwrap();

        assert_eq!(page.count, 12);
        assert_eq!(page.recipes.len(), 2);
        assert_eq!(page.recipes[0].recipe.summary.name, "Borscht");
        assert!(!page.recipes[0].is_favorited);
    }

    #[tokio::test]
    async fn should_scope_favorite_and_cart_filters_to_viewer() {
        let expected = RecipeFilter {
            author_id: Some(UserId::new("chef")),
            tag_slugs: vec!["breakfast".to_string(), "lunch".to_string()],
            favorited_by: Some(UserId::new("reader")),
            in_cart_of: Some(UserId::new("reader")),
        };
        let mut recipes = MockRecipeRepo::new();
        recipes
            .expect_count()
            .with(eq(expected.clone()))
            .returning(|_| Ok(1));
        recipes
            .expect_search()
            .withf(move |filter, _| *filter == expected)
            .returning(|_, _| Ok(vec![recipe("Borscht", "chef")]));

        let mut request = params(Some("reader"));
        request.author_id = Some(UserId::new("chef"));
        request.tag_slugs = vec!["breakfast".to_string(), "lunch".to_string()];
        request.is_favorited = true;
        request.is_in_shopping_cart = true;

        let page = use_case(recipes).execute(request).await.unwrap();

        assert_eq!(page.count, 1);
        assert!(page.recipes[0].is_favorited);
        assert!(page.recipes[0].is_in_shopping_cart);
    }

    #[tokio::test]
    async fn should_return_empty_page_for_anonymous_favorite_filter() {
        let mut recipes = MockRecipeRepo::new();
        recipes.expect_count().never();
        recipes.expect_search().never();

        let mut request = params(None);
        request.is_favorited = true;

        let page = use_case(recipes).execute(request).await.unwrap();

        assert_eq!(page.count, 0);
        assert!(page.recipes.is_empty());
    }

    #[tokio::test]
    async fn should_map_repository_failure() {
        let mut recipes = MockRecipeRepo::new();
        recipes
            .expect_count()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let result = use_case(recipes).execute(params(None)).await;

        assert!(matches!(result.unwrap_err(), RecipeError::Repository(_)));
    }
}
