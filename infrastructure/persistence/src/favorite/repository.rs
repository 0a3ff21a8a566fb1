use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::favorite::repository::FavoriteRepository;
use business::domain::shared::value_objects::UserId;

use crate::errors::map_sqlx_error;

pub struct FavoriteRepositoryPostgres {
    pool: PgPool,
}

impl FavoriteRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryPostgres {
    async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND recipe_id = $2)",
        )
        .bind(user_id.as_str())
        .bind(recipe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn add(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO favorites (user_id, recipe_id) VALUES ($1, $2)")
            .bind(user_id.as_str())
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn remove(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND recipe_id = $2")
            .bind(user_id.as_str())
            .bind(recipe_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
