use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::recipe::model::{Recipe, RecipeDetails};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::subscription::repository::SubscriptionRepository;
use crate::domain::tag::repository::TagRepository;
use crate::domain::user::repository::UserRepository;

/// Completes a stored recipe with its author, tags, ingredients and the
/// viewer's favorite/cart/subscription flags.
pub struct RecipeDetailsLoader {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub tag_repository: Arc<dyn TagRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub favorite_repository: Arc<dyn FavoriteRepository>,
    pub shopping_cart_repository: Arc<dyn ShoppingCartRepository>,
    pub subscription_repository: Arc<dyn SubscriptionRepository>,
}

impl RecipeDetailsLoader {
    pub async fn load(
        &self,
        recipe: Recipe,
        viewer: Option<&UserId>,
    ) -> Result<RecipeDetails, RepositoryError> {
        let recipe_id = recipe.summary.id;
        let author = self
            .user_repository
            .get_by_id(&recipe.summary.author_id)
            .await?;
        let tags = self.tag_repository.get_by_recipe(recipe_id).await?;
        let ingredients = self
            .recipe_repository
            .get_used_ingredients(recipe_id)
            .await?;

        let (is_favorited, is_in_shopping_cart, is_subscribed_to_author) = match viewer {
            Some(viewer) => (
                self.favorite_repository.exists(viewer, recipe_id).await?,
                self.shopping_cart_repository
                    .exists(viewer, recipe_id)
                    .await?,
                self.subscription_repository
                    .exists(viewer, &author.id)
                    .await?,
            ),
            None => (false, false, false),
        };

        Ok(RecipeDetails {
            recipe,
            author,
            is_subscribed_to_author,
            tags,
            ingredients,
            is_favorited,
            is_in_shopping_cart,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::mocks::*;
    use super::*;

    #[tokio::test]
    async fn should_fill_viewer_flags_for_signed_in_viewer() {
        let loader = loader(recipe_repo_with_ingredients(), true);
        let viewer = UserId::new("reader");

        let details = loader
            .load(recipe("Borscht", "chef"), Some(&viewer))
            .await
            .unwrap();

        assert!(details.is_favorited);
        assert!(details.is_in_shopping_cart);
        assert!(details.is_subscribed_to_author);
        assert_eq!(details.author.id, UserId::new("chef"));
        assert_eq!(details.tags[0].slug, "lunch");
        assert_eq!(details.ingredients[0].amount, 5);
    }

    #[tokio::test]
    async fn should_not_query_flags_for_anonymous_viewer() {
        let loader = RecipeDetailsLoader {
            recipe_repository: Arc::new(recipe_repo_with_ingredients()),
            tag_repository: Arc::new(tag_repo()),
            user_repository: Arc::new(user_repo()),
            favorite_repository: Arc::new(MockFavoriteRepo::new()),
            shopping_cart_repository: Arc::new(MockCartRepo::new()),
            subscription_repository: Arc::new(MockSubscriptionRepo::new()),
        };

        let details = loader.load(recipe("Borscht", "chef"), None).await.unwrap();

        assert!(!details.is_favorited);
        assert!(!details.is_in_shopping_cart);
        assert!(!details.is_subscribed_to_author);
        assert_eq!(details.recipe.text, "How to cook Borscht");
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut recipes = MockRecipeRepo::new();
        recipes
            .expect_get_used_ingredients()
            .returning(|_| Err(RepositoryError::DatabaseError));
        let loader = loader(recipes, false);

        let result = loader.load(recipe("Borscht", "chef"), None).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::DatabaseError));
    }
}
