use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::repository::IngredientRepository;

use super::entity::IngredientEntity;
use crate::errors::map_sqlx_error;

pub struct IngredientRepositoryPostgres {
    pool: PgPool,
}

impl IngredientRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE wildcards so a user supplied prefix is matched literally.
fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryPostgres {
    async fn get_all(
        &self,
        name_prefix: Option<String>,
    ) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = match name_prefix {
            Some(prefix) => {
                sqlx::query_as::<_, IngredientEntity>(
                    "SELECT id, name, measurement_unit FROM ingredients WHERE name ILIKE $1 ORDER BY name, id",
                )
                .bind(like_prefix(&prefix))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, IngredientEntity>(
                    "SELECT id, name, measurement_unit FROM ingredients ORDER BY name, id",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(
            "SELECT id, name, measurement_unit FROM ingredients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
