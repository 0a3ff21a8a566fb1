use sqlx::FromRow;
use uuid::Uuid;

use business::domain::tag::model::Tag;

#[derive(Debug, FromRow)]
pub struct TagEntity {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: String,
}

impl TagEntity {
    pub fn into_domain(self) -> Tag {
        Tag::from_repository(self.id, self.name, self.slug, self.color)
    }
}
