use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shared::value_objects::UserId;
use business::domain::shopping_cart::model::ShoppingCartEntry;

#[derive(Debug, FromRow)]
pub struct ShoppingCartEntity {
    pub user_id: String,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ShoppingCartEntity {
    pub fn into_domain(self) -> ShoppingCartEntry {
        ShoppingCartEntry::from_repository(UserId::new(self.user_id), self.recipe_id, self.created_at)
    }
}
