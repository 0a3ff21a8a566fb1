use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{PageRequest, UserId};
use business::domain::subscription::repository::SubscriptionRepository;
use business::domain::user::model::Author;

use crate::errors::map_sqlx_error;
use crate::user::entity::AuthorEntity;

pub struct SubscriptionRepositoryPostgres {
    pool: PgPool,
}

impl SubscriptionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionRepositoryPostgres {
    async fn exists(&self, user_id: &UserId, author_id: &UserId) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM follows WHERE user_id = $1 AND author_id = $2)",
        )
        .bind(user_id.as_str())
        .bind(author_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn add(&self, user_id: &UserId, author_id: &UserId) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO follows (user_id, author_id) VALUES ($1, $2)")
            .bind(user_id.as_str())
            .bind(author_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn remove(&self, user_id: &UserId, author_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM follows WHERE user_id = $1 AND author_id = $2")
            .bind(user_id.as_str())
            .bind(author_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_authors(
        &self,
        user_id: &UserId,
        page: PageRequest,
    ) -> Result<Vec<Author>, RepositoryError> {
        let entities = sqlx::query_as::<_, AuthorEntity>(
            r#"SELECT u.id, u.username, u.email, u.first_name, u.last_name
            FROM follows f
            JOIN users u ON u.id = f.author_id
            WHERE f.user_id = $1
            ORDER BY u.id
            LIMIT $2 OFFSET $3"#,
        )
        .bind(user_id.as_str())
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM follows WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
