use sqlx::FromRow;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::recipe::model::{Recipe, RecipeSummary, UsedIngredient};
use business::domain::shared::value_objects::UserId;

/// Columns are `CHECK`ed to be at least 1, so a negative value means a
/// corrupt row.
fn positive_column(column: &str, value: i32) -> Result<u32, RepositoryError> {
    u32::try_from(value).map_err(|_| {
        tracing::error!("Column {} holds out-of-range value {}", column, value);
        RepositoryError::DatabaseError
    })
}

#[derive(Debug, FromRow)]
pub struct RecipeSummaryEntity {
    pub id: Uuid,
    pub author_id: String,
    pub name: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

impl RecipeSummaryEntity {
    pub fn into_domain(self) -> Result<RecipeSummary, RepositoryError> {
        Ok(RecipeSummary::from_repository(
            self.id,
            UserId::new(self.author_id),
            self.name,
            self.image,
            positive_column("recipes.cooking_time", self.cooking_time)?,
        ))
    }
}

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    #[sqlx(flatten)]
    pub summary: RecipeSummaryEntity,
    pub text: String,
}

impl RecipeEntity {
    pub fn into_domain(self) -> Result<Recipe, RepositoryError> {
        Ok(Recipe {
            summary: self.summary.into_domain()?,
            text: self.text,
        })
    }
}

/// One `used_ingredients` row joined with its ingredient.
#[derive(Debug, FromRow)]
pub struct UsedIngredientEntity {
    pub ingredient_id: Uuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl UsedIngredientEntity {
    pub fn into_domain(self) -> Result<UsedIngredient, RepositoryError> {
        Ok(UsedIngredient::from_repository(
            Ingredient::from_repository(self.ingredient_id, self.name, self.measurement_unit),
            positive_column("used_ingredients.amount", self.amount)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used_ingredient_row(amount: i32) -> UsedIngredientEntity {
        UsedIngredientEntity {
            ingredient_id: Uuid::new_v4(),
            name: "potato".to_string(),
            measurement_unit: "kg".to_string(),
            amount,
        }
    }

    fn summary_row(cooking_time: i32) -> RecipeSummaryEntity {
        RecipeSummaryEntity {
            id: Uuid::new_v4(),
            author_id: "chef".to_string(),
            name: "Borscht".to_string(),
            image: Some("recipes/images/borscht.png".to_string()),
            cooking_time,
        }
    }

    #[test]
    fn should_map_used_ingredient_row() {
        let used = used_ingredient_row(2).into_domain().unwrap();

        assert_eq!(used.ingredient.name, "potato");
        assert_eq!(used.ingredient.measurement_unit, "kg");
        assert_eq!(used.amount, 2);
    }

    #[test]
    fn should_reject_negative_amount_instead_of_zeroing_it() {
        let result = used_ingredient_row(-3).into_domain();

        assert!(matches!(result.unwrap_err(), RepositoryError::DatabaseError));
    }

    #[test]
    fn should_map_recipe_summary_row() {
        let summary = summary_row(90).into_domain().unwrap();

        assert_eq!(summary.author_id, UserId::new("chef"));
        assert_eq!(summary.cooking_time, 90);
    }

    #[test]
    fn should_reject_negative_cooking_time() {
        let result = summary_row(-1).into_domain();

        assert!(matches!(result.unwrap_err(), RepositoryError::DatabaseError));
    }

    #[test]
    fn should_map_recipe_row_with_text() {
        let entity = RecipeEntity {
            summary: summary_row(45),
            text: "Boil the beets.".to_string(),
        };

        let recipe = entity.into_domain().unwrap();

        assert_eq!(recipe.text, "Boil the beets.");
        assert_eq!(recipe.summary.name, "Borscht");
    }
}
