#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("tag.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
