use poem_openapi::Object;

use business::domain::recipe::model::{RecipeDetails, RecipePage, RecipeSummary, UsedIngredient};

use crate::api::tag::dto::TagResponse;

/// Short recipe card returned by cart, favorite and subscription endpoints.
#[derive(Debug, Clone, Object)]
pub struct RecipeSummaryResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Cooking time in minutes
    pub cooking_time: u32,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(recipe: RecipeSummary) -> Self {
        Self {
            id: recipe.id.to_string(),
            name: recipe.name,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeAuthorResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
}

/// Ingredient line of a recipe: the ingredient plus its amount.
#[derive(Debug, Clone, Object)]
pub struct RecipeIngredientResponse {
    pub id: String,
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

impl From<UsedIngredient> for RecipeIngredientResponse {
    fn from(used: UsedIngredient) -> Self {
        Self {
            id: used.ingredient.id.to_string(),
            name: used.ingredient.name,
            measurement_unit: used.ingredient.measurement_unit,
            amount: used.amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    pub id: String,
    pub tags: Vec<TagResponse>,
    pub author: RecipeAuthorResponse,
    pub ingredients: Vec<RecipeIngredientResponse>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub text: String,
    /// Cooking time in minutes
    pub cooking_time: u32,
}

impl From<RecipeDetails> for RecipeResponse {
    fn from(details: RecipeDetails) -> Self {
        let summary = details.recipe.summary;
        let author = details.author;
        Self {
            id: summary.id.to_string(),
            tags: details.tags.into_iter().map(Into::into).collect(),
            author: RecipeAuthorResponse {
                id: author.id.to_string(),
                email: author.email,
                username: author.username,
                first_name: author.first_name,
                last_name: author.last_name,
                is_subscribed: details.is_subscribed_to_author,
            },
            ingredients: details.ingredients.into_iter().map(Into::into).collect(),
            is_favorited: details.is_favorited,
            is_in_shopping_cart: details.is_in_shopping_cart,
            name: summary.name,
            image: summary.image,
            text: details.recipe.text,
            cooking_time: summary.cooking_time,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipePageResponse {
    pub count: u64,
    pub response: Vec<RecipeResponse>,
}

impl From<RecipePage> for RecipePageResponse {
    fn from(page: RecipePage) -> Self {
        Self {
            count: page.count,
            response: page.recipes.into_iter().map(Into::into).collect(),
        }
    }
}
