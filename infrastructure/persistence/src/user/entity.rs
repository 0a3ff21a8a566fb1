use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::Author;

#[derive(Debug, FromRow)]
pub struct AuthorEntity {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl AuthorEntity {
    pub fn into_domain(self) -> Author {
        Author::from_repository(
            UserId::new(self.id),
            self.username,
            self.email,
            self.first_name,
            self.last_name,
        )
    }
}
