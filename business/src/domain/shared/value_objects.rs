use serde::{Deserialize, Serialize};

/// Identifier of an account, taken from the `user_id` claim of the bearer token.
/// Every per-user query (cart, favorites, subscriptions) is scoped by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Limit/offset window over a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u32,
    pub offset: u32,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u32 = 6;
    pub const MAX_LIMIT: u32 = 100;

    /// Builds a page window from optional query values, clamping the limit
    /// to `1..=MAX_LIMIT`.
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        let limit = limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);
        Self {
            limit,
            offset: offset.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_user_id_from_string() {
        let user_id = UserId::new("42".to_string());
        assert_eq!(user_id.as_str(), "42");
    }

    #[test]
    fn should_display_user_id() {
        let user_id = UserId::new("cook-7");
        assert_eq!(format!("{}", user_id), "cook-7");
    }

    #[test]
    fn should_compare_user_ids_for_equality() {
        assert_eq!(UserId::new("same"), UserId::from("same"));
        assert_ne!(UserId::new("same"), UserId::from("other".to_string()));
    }

    #[test]
    fn should_use_default_limit_when_absent() {
        let page = PageRequest::new(None, None);

        assert_eq!(page.limit, PageRequest::DEFAULT_LIMIT);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn should_clamp_limit_into_allowed_range() {
        assert_eq!(PageRequest::new(Some(0), None).limit, 1);
        assert_eq!(PageRequest::new(Some(10_000), None).limit, PageRequest::MAX_LIMIT);
        assert_eq!(PageRequest::new(Some(20), Some(40)), PageRequest { limit: 20, offset: 40 });
    }
}
