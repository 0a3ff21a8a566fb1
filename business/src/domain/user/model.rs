use crate::domain::shared::value_objects::UserId;

/// Public profile of a user as other users see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn from_repository(
        id: UserId,
        username: String,
        email: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            id,
            username,
            email,
            first_name,
            last_name,
        }
    }
}
