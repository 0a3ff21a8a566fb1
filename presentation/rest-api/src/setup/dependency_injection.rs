use std::sync::Arc;

use logger::TracingLogger;
use pdf::PdfShoppingListRenderer;
use persistence::favorite::repository::FavoriteRepositoryPostgres;
use persistence::ingredient::repository::IngredientRepositoryPostgres;
use persistence::recipe::repository::RecipeRepositoryPostgres;
use persistence::shopping_cart::repository::ShoppingCartRepositoryPostgres;
use persistence::subscription::repository::SubscriptionRepositoryPostgres;
use persistence::tag::repository::TagRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::favorite::add::AddFavoriteUseCaseImpl;
use business::application::favorite::remove::RemoveFavoriteUseCaseImpl;
use business::application::ingredient::get_all::GetAllIngredientsUseCaseImpl;
use business::application::ingredient::get_by_id::GetIngredientByIdUseCaseImpl;
use business::application::recipe::details::RecipeDetailsLoader;
use business::application::recipe::get_all::GetRecipesUseCaseImpl;
use business::application::recipe::get_by_id::GetRecipeByIdUseCaseImpl;
use business::application::shopping_cart::add::AddToShoppingCartUseCaseImpl;
use business::application::shopping_cart::aggregate::AggregateShoppingCartUseCaseImpl;
use business::application::shopping_cart::download::DownloadShoppingCartUseCaseImpl;
use business::application::shopping_cart::remove::RemoveFromShoppingCartUseCaseImpl;
use business::application::subscription::get_all::GetSubscriptionsUseCaseImpl;
use business::application::subscription::subscribe::SubscribeUseCaseImpl;
use business::application::subscription::unsubscribe::UnsubscribeUseCaseImpl;
use business::application::tag::get_all::GetAllTagsUseCaseImpl;
use business::application::tag::get_by_id::GetTagByIdUseCaseImpl;

use crate::api::favorite::routes::FavoriteApi;
use crate::api::health::routes::HealthApi;
use crate::api::ingredient::routes::IngredientApi;
use crate::api::recipe::routes::RecipeApi;
use crate::api::shopping_cart::routes::ShoppingCartApi;
use crate::api::subscription::routes::SubscriptionApi;
use crate::api::tag::routes::TagApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub ingredient_api: IngredientApi,
    pub tag_api: TagApi,
    pub recipe_api: RecipeApi,
    pub favorite_api: FavoriteApi,
    pub shopping_cart_api: ShoppingCartApi,
    pub subscription_api: SubscriptionApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, renderer: PdfShoppingListRenderer) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let ingredient_repository = Arc::new(IngredientRepositoryPostgres::new(pool.clone()));
        let tag_repository = Arc::new(TagRepositoryPostgres::new(pool.clone()));
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryPostgres::new(pool.clone()));
        let shopping_cart_repository = Arc::new(ShoppingCartRepositoryPostgres::new(pool.clone()));
        let subscription_repository = Arc::new(SubscriptionRepositoryPostgres::new(pool));
        let renderer = Arc::new(renderer);

        // Catalogue
        let ingredient_api = IngredientApi::new(
            Arc::new(GetAllIngredientsUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetIngredientByIdUseCaseImpl {
                repository: ingredient_repository,
                logger: logger.clone(),
            }),
        );
        let tag_api = TagApi::new(
            Arc::new(GetAllTagsUseCaseImpl {
                repository: tag_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetTagByIdUseCaseImpl {
                repository: tag_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Recipes
        let details_loader = Arc::new(RecipeDetailsLoader {
            recipe_repository: recipe_repository.clone(),
            tag_repository,
            user_repository: user_repository.clone(),
            favorite_repository: favorite_repository.clone(),
            shopping_cart_repository: shopping_cart_repository.clone(),
            subscription_repository: subscription_repository.clone(),
        });
        let recipe_api = RecipeApi::new(
            Arc::new(GetRecipesUseCaseImpl {
                repository: recipe_repository.clone(),
                details_loader: details_loader.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetRecipeByIdUseCaseImpl {
                repository: recipe_repository.clone(),
                details_loader,
                logger: logger.clone(),
            }),
        );

        // Favorites
        let favorite_api = FavoriteApi::new(
            Arc::new(AddFavoriteUseCaseImpl {
                repository: favorite_repository.clone(),
                recipe_repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveFavoriteUseCaseImpl {
                repository: favorite_repository,
                recipe_repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Shopping cart
        let aggregate_use_case = Arc::new(AggregateShoppingCartUseCaseImpl {
            repository: shopping_cart_repository.clone(),
            recipe_repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let shopping_cart_api = ShoppingCartApi::new(
            Arc::new(AddToShoppingCartUseCaseImpl {
                repository: shopping_cart_repository.clone(),
                recipe_repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveFromShoppingCartUseCaseImpl {
                repository: shopping_cart_repository,
                recipe_repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DownloadShoppingCartUseCaseImpl {
                aggregate_use_case,
                renderer,
                logger: logger.clone(),
            }),
        );

        // Subscriptions
        let subscription_api = SubscriptionApi::new(
            Arc::new(SubscribeUseCaseImpl {
                repository: subscription_repository.clone(),
                user_repository: user_repository.clone(),
                recipe_repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UnsubscribeUseCaseImpl {
                repository: subscription_repository.clone(),
                user_repository,
                logger: logger.clone(),
            }),
            Arc::new(GetSubscriptionsUseCaseImpl {
                repository: subscription_repository,
                recipe_repository,
                logger,
            }),
        );

        Self {
            health_api: HealthApi,
            ingredient_api,
            tag_api,
            recipe_api,
            favorite_api,
            shopping_cart_api,
            subscription_api,
        }
    }
}
