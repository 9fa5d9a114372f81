use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use emoji_common::ProviderConfig;
use emoji_core::error::DomainError;
use emoji_core::traits::{MeaningProvider, RepoResult};

/// Failures while building or calling the upstream client
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to meaning provider failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("meaning provider returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<ProviderError> for DomainError {
    fn from(err: ProviderError) -> Self {
        DomainError::UpstreamUnavailable(err.to_string())
    }
}

/// Upstream response body; a missing or null `meaning` reads as empty
#[derive(Debug, Deserialize)]
struct MeaningBody {
    #[serde(default)]
    meaning: Option<String>,
}

/// Meaning provider speaking plain HTTP + JSON
#[derive(Debug, Clone)]
pub struct HttpMeaningProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpMeaningProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProviderError::Build)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Self::new(&config.url, config.timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MeaningProvider for HttpMeaningProvider {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn lookup(&self, emoji_char: &str) -> RepoResult<Option<String>> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("emoji", emoji_char)])
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(status = %status, "Meaning provider answered with a status other than 200");
            return Ok(None);
        }

        let body = response
            .json::<MeaningBody>()
            .await
            .map_err(ProviderError::Decode)?;

        let meaning = body.meaning.unwrap_or_default();
        debug!(empty = meaning.is_empty(), "Meaning provider answered");
        Ok(Some(meaning))
    }
}
