use uuid::Uuid;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::shared::value_objects::UserId;
use crate::domain::tag::model::Tag;
use crate::domain::user::model::Author;

use super::errors::RecipeError;

/// Short form of a recipe, as returned by the favorite, cart and
/// subscription endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub author_id: UserId,
    pub name: String,
    pub image: Option<String>,
    /// Cooking time in minutes.
    pub cooking_time: u32,
}

impl RecipeSummary {
    pub fn from_repository(
        id: Uuid,
        author_id: UserId,
        name: String,
        image: Option<String>,
        cooking_time: u32,
    ) -> Self {
        Self {
            id,
            author_id,
            name,
            image,
            cooking_time,
        }
    }
}

/// "This recipe uses this ingredient in this quantity."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsedIngredient {
    pub ingredient: Ingredient,
    pub amount: u32,
}

impl UsedIngredient {
    pub fn new(ingredient: Ingredient, amount: u32) -> Result<Self, RecipeError> {
        if amount < 1 {
            return Err(RecipeError::AmountTooSmall);
        }
        Ok(Self { ingredient, amount })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(ingredient: Ingredient, amount: u32) -> Self {
        Self { ingredient, amount }
    }
}

/// A stored recipe: the summary columns plus its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub summary: RecipeSummary,
    pub text: String,
}

/// Which recipes a listing keeps. Every set criterion must hold.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub author_id: Option<UserId>,
    /// Any of these tag slugs matches.
    pub tag_slugs: Vec<String>,
    pub favorited_by: Option<UserId>,
    pub in_cart_of: Option<UserId>,
}

/// A recipe as the read endpoints return it, with the viewer's flags.
/// Anonymous viewers get every flag as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetails {
    pub recipe: Recipe,
    pub author: Author,
    pub is_subscribed_to_author: bool,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<UsedIngredient>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipePage {
    pub count: u64,
    pub recipes: Vec<RecipeDetails>,
}
