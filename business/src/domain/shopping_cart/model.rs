use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;

/// Heading printed on the first page of the shopping list.
pub const SHOPPING_LIST_TITLE: &str = "Shopping list";
/// Name suggested to the browser for the downloaded document.
pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.pdf";

/// A recipe a user has put into their shopping cart.
/// At most one entry exists per (user, recipe) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingCartEntry {
    pub user_id: UserId,
    pub recipe_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ShoppingCartEntry {
    pub fn new(user_id: UserId, recipe_id: Uuid) -> Self {
        Self {
            user_id,
            recipe_id,
            created_at: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(user_id: UserId, recipe_id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            recipe_id,
            created_at,
        }
    }
}
