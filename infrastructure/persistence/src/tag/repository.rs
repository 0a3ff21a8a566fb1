use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::tag::model::Tag;
use business::domain::tag::repository::TagRepository;

use super::entity::TagEntity;
use crate::errors::map_sqlx_error;

pub struct TagRepositoryPostgres {
    pool: PgPool,
}

impl TagRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for TagRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Tag>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, TagEntity>("SELECT id, name, slug, color FROM tags ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Tag, RepositoryError> {
        let entity = sqlx::query_as::<_, TagEntity>(
            "SELECT id, name, slug, color FROM tags WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_recipe(&self, recipe_id: Uuid) -> Result<Vec<Tag>, RepositoryError> {
        let entities = sqlx::query_as::<_, TagEntity>(
            r#"SELECT t.id, t.name, t.slug, t.color
            FROM recipe_tags rt
            JOIN tags t ON t.id = rt.tag_id
            WHERE rt.recipe_id = $1
            ORDER BY t.name"#,
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
