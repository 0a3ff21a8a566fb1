#[derive(Debug, thiserror::Error)]
pub enum ShoppingCartError {
    #[error("shopping_cart.recipe_not_found")]
    RecipeNotFound,
    #[error("shopping_cart.already_in_cart")]
    AlreadyInCart,
    #[error("shopping_cart.not_in_cart")]
    NotInCart,
    #[error("shopping_cart.rendering_failed: {0}")]
    Rendering(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
