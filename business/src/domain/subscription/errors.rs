#[derive(Debug, thiserror::Error)]
pub enum SubscriptionError {
    #[error("subscription.author_not_found")]
    AuthorNotFound,
    #[error("subscription.self_subscription")]
    SelfSubscription,
    #[error("subscription.already_subscribed")]
    AlreadySubscribed,
    #[error("subscription.not_subscribed")]
    NotSubscribed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
