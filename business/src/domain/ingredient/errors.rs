#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
