use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    /// Hex color in `#RRGGBB` form.
    pub color: String,
}

impl Tag {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, slug: String, color: String) -> Self {
        Self {
            id,
            name,
            slug,
            color,
        }
    }
}
