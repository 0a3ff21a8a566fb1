use business::domain::errors::RepositoryError;

/// Maps a failed query to the repository port error. Unique violations are
/// reported as `Duplicated` so toggles can answer with a 400.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        _ => {
            tracing::error!("Database query failed: {}", error);
            RepositoryError::DatabaseError
        }
    }
}
