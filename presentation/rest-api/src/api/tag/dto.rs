use poem_openapi::Object;

use business::domain::tag::model::Tag;

#[derive(Debug, Clone, Object)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Hex color, `#RRGGBB`
    pub color: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name,
            slug: tag.slug,
            color: tag.color,
        }
    }
}
