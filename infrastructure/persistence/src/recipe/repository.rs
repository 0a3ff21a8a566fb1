use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::recipe::model::{Recipe, RecipeFilter, RecipeSummary, UsedIngredient};
use business::domain::recipe::repository::RecipeRepository;
use business::domain::shared::value_objects::{PageRequest, UserId};

use super::entity::{RecipeEntity, RecipeSummaryEntity, UsedIngredientEntity};
use crate::errors::map_sqlx_error;

const RECIPE_COLUMNS: &str = "r.id, r.author_id, r.name, r.image, r.cooking_time, r.text";

/// Filter predicates bound as $1..$4: author, tag slugs, favorited-by and
/// in-cart-of. An unset criterion is NULL (or an empty array) and matches
/// every row. `EXISTS` keeps one row per recipe when several tags match.
const FILTER_CLAUSE: &str = r#"WHERE ($1::TEXT IS NULL OR r.author_id = $1)
    AND (cardinality($2::TEXT[]) = 0 OR EXISTS (
        SELECT 1 FROM recipe_tags rt JOIN tags t ON t.id = rt.tag_id
        WHERE rt.recipe_id = r.id AND t.slug = ANY($2)))
    AND ($3::TEXT IS NULL OR EXISTS (
        SELECT 1 FROM favorites f WHERE f.recipe_id = r.id AND f.user_id = $3))
    AND ($4::TEXT IS NULL OR EXISTS (
        SELECT 1 FROM shopping_cart s WHERE s.recipe_id = r.id AND s.user_id = $4))"#;

fn user_param(user_id: &Option<UserId>) -> Option<&str> {
    user_id.as_ref().map(UserId::as_str)
}

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_summary(&self, id: Uuid) -> Result<RecipeSummary, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeSummaryEntity>(
            "SELECT id, author_id, name, image, cooking_time FROM recipes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError> {
        let query = format!("SELECT {RECIPE_COLUMNS} FROM recipes r WHERE r.id = $1");
        let entity = sqlx::query_as::<_, RecipeEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn get_used_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> Result<Vec<UsedIngredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, UsedIngredientEntity>(
            r#"SELECT i.id AS ingredient_id, i.name, i.measurement_unit, u.amount
            FROM used_ingredients u
            JOIN ingredients i ON i.id = u.ingredient_id
            WHERE u.recipe_id = $1
            ORDER BY i.name, i.id"#,
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn get_by_author(
        &self,
        author_id: &UserId,
        limit: Option<u32>,
    ) -> Result<Vec<RecipeSummary>, RepositoryError> {
        // LIMIT NULL means no limit in PostgreSQL.
        let entities = sqlx::query_as::<_, RecipeSummaryEntity>(
            r#"SELECT id, author_id, name, image, cooking_time FROM recipes
            WHERE author_id = $1
            ORDER BY created_at DESC, id
            LIMIT $2"#,
        )
        .bind(author_id.as_str())
        .bind(limit.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn search(
        &self,
        filter: &RecipeFilter,
        page: PageRequest,
    ) -> Result<Vec<Recipe>, RepositoryError> {
        let query = format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes r {FILTER_CLAUSE}
            ORDER BY r.created_at DESC, r.id
            LIMIT $5 OFFSET $6"
        );
        let entities = sqlx::query_as::<_, RecipeEntity>(&query)
            .bind(user_param(&filter.author_id))
            .bind(&filter.tag_slugs)
            .bind(user_param(&filter.favorited_by))
            .bind(user_param(&filter.in_cart_of))
            .bind(i64::from(page.limit))
            .bind(i64::from(page.offset))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        entities.into_iter().map(|e| e.into_domain()).collect()
    }

    async fn count(&self, filter: &RecipeFilter) -> Result<u64, RepositoryError> {
        let query = format!("SELECT COUNT(*) FROM recipes r {FILTER_CLAUSE}");
        let count = sqlx::query_scalar::<_, i64>(&query)
            .bind(user_param(&filter.author_id))
            .bind(&filter.tag_slugs)
            .bind(user_param(&filter.favorited_by))
            .bind(user_param(&filter.in_cart_of))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
