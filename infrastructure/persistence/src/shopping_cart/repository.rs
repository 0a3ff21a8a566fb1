use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_cart::model::ShoppingCartEntry;
use business::domain::shopping_cart::repository::ShoppingCartRepository;

use super::entity::ShoppingCartEntity;
use crate::errors::map_sqlx_error;

pub struct ShoppingCartRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingCartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingCartRepository for ShoppingCartRepositoryPostgres {
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<ShoppingCartEntry>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingCartEntity>(
            "SELECT user_id, recipe_id, created_at FROM shopping_cart WHERE user_id = $1 ORDER BY created_at, recipe_id",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn exists(&self, user_id: &UserId, recipe_id: Uuid) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM shopping_cart WHERE user_id = $1 AND recipe_id = $2)",
        )
        .bind(user_id.as_str())
        .bind(recipe_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)
    }

    async fn add(&self, entry: &ShoppingCartEntry) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO shopping_cart (user_id, recipe_id, created_at) VALUES ($1, $2, $3)")
            .bind(entry.user_id.as_str())
            .bind(entry.recipe_id)
            .bind(entry.created_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn remove(&self, user_id: &UserId, recipe_id: Uuid) -> Result<(), RepositoryError> {
        let result =
            sqlx::query("DELETE FROM shopping_cart WHERE user_id = $1 AND recipe_id = $2")
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
