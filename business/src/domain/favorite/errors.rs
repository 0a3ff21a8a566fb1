#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.recipe_not_found")]
    RecipeNotFound,
    #[error("favorite.already_favorited")]
    AlreadyFavorited,
    #[error("favorite.not_favorited")]
    NotFavorited,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
