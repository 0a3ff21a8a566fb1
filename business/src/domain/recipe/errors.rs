#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.not_found")]
    NotFound,
    #[error("recipe.amount_too_small")]
    AmountTooSmall,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
