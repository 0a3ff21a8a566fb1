use poem_openapi::Object;

use business::domain::subscription::model::{SubscribedAuthor, SubscriptionPage};

use crate::api::recipe::dto::RecipeSummaryResponse;

#[derive(Debug, Clone, Object)]
pub struct AuthorResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    pub recipes: Vec<RecipeSummaryResponse>,
}

impl From<SubscribedAuthor> for AuthorResponse {
    fn from(subscribed: SubscribedAuthor) -> Self {
        let author = subscribed.author;
        Self {
            id: author.id.to_string(),
            email: author.email,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed: subscribed.is_subscribed,
            recipes: subscribed.recipes.into_iter().map(Into::into).collect(),
        }
    }
}

/// One page of followed authors with the total number of subscriptions.
#[derive(Debug, Clone, Object)]
pub struct SubscriptionPageResponse {
    pub count: u64,
    pub response: Vec<AuthorResponse>,
}

impl From<SubscriptionPage> for SubscriptionPageResponse {
    fn from(page: SubscriptionPage) -> Self {
        Self {
            count: page.count,
            response: page.authors.into_iter().map(Into::into).collect(),
        }
    }
}
