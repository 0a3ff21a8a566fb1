use poem_openapi::Object;

use business::domain::ingredient::model::Ingredient;

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    pub id: String,
    pub name: String,
    pub measurement_unit: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id.to_string(),
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}
