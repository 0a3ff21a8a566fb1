use uuid::Uuid;

/// A purchasable ingredient and the unit it is measured in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub measurement_unit: String,
}

impl Ingredient {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, measurement_unit: String) -> Self {
        Self {
            id,
            name,
            measurement_unit,
        }
    }
}
