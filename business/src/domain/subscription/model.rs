use crate::domain::recipe::model::RecipeSummary;
use crate::domain::user::model::Author;

/// An author seen from a follower's side, with (a window of) their recipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribedAuthor {
    pub author: Author,
    pub is_subscribed: bool,
    pub recipes: Vec<RecipeSummary>,
}

/// One limit/offset page of followed authors plus the total count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionPage {
    pub count: u64,
    pub authors: Vec<SubscribedAuthor>,
}
