//! Upstream meaning provider port

use async_trait::async_trait;

use super::repositories::RepoResult;

/// External service that knows what an emoji means
///
/// Outcomes:
/// - `Ok(Some(meaning))`: the provider answered successfully (the meaning may be empty)
/// - `Ok(None)`: the provider answered with a status other than 200
/// - `Err(DomainError::UpstreamUnavailable)`: transport failure or unreadable body
#[async_trait]
pub trait MeaningProvider: Send + Sync {
    async fn lookup(&self, emoji_char: &str) -> RepoResult<Option<String>>;
}
