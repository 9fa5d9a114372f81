//! Emoji resolution service
//!
//! Cache-aside lookup: the `emoji_meanings` table is consulted first, the
//! upstream provider only on a miss, and a successful upstream answer is
//! written back before it is returned.

use emoji_common::CacheWritePolicy;
use emoji_core::{validate_emoji, DomainError, EmojiMeaning, EmojiQuery, MeaningSource, Snowflake};
use tracing::{debug, info, instrument, warn};

use crate::dto::InterpretEmojiResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A meaning together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub emoji: String,
    pub meaning: String,
    pub source: MeaningSource,
}

/// Emoji service
pub struct EmojiService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EmojiService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve an emoji for an HTTP caller and log it against `user_id` when known
    #[instrument(skip(self))]
    pub async fn interpret(
        &self,
        emoji: &str,
        user_id: Option<Snowflake>,
    ) -> ServiceResult<InterpretEmojiResponse> {
        let resolution = self.resolve(emoji).await?;

        if let Some(user_id) = user_id {
            self.record_activity(user_id, &resolution.emoji).await;
        }

        Ok(InterpretEmojiResponse::from(resolution))
    }

    /// Cache check, then upstream fetch, then cache populate
    #[instrument(skip(self))]
    pub async fn resolve(&self, emoji: &str) -> ServiceResult<Resolution> {
        validate_emoji(emoji)?;

        if let Some(cached) = self.ctx.emoji_repo().find(emoji).await? {
            if cached.is_usable() {
                debug!(emoji, source = %MeaningSource::Cache, "Cache hit");
                return Ok(Resolution {
                    emoji: cached.emoji_char,
                    meaning: cached.meaning,
                    source: MeaningSource::Cache,
                });
            }
        }

        let meaning = self.fetch_upstream(emoji).await?;
        let meaning = self.store(emoji, meaning).await?;

        info!(emoji, source = %MeaningSource::External, "Meaning fetched from provider");

        Ok(Resolution {
            emoji: emoji.to_string(),
            meaning,
            source: MeaningSource::External,
        })
    }

    async fn fetch_upstream(&self, emoji: &str) -> ServiceResult<String> {
        let timeout = self.ctx.emoji_settings().provider_timeout;

        let answer = tokio::time::timeout(timeout, self.ctx.provider().lookup(emoji))
            .await
            .map_err(|_| {
                warn!(emoji, timeout_ms = timeout.as_millis() as u64, "Provider lookup timed out");
                DomainError::UpstreamUnavailable(format!(
                    "provider did not answer within {}ms",
                    timeout.as_millis()
                ))
            })??;

        match answer {
            Some(meaning) if !meaning.is_empty() => Ok(meaning),
            Some(_) => {
                debug!(emoji, "Provider returned an empty meaning");
                Err(DomainError::EmojiMeaningNotFound(emoji.to_string()).into())
            }
            None => {
                debug!(emoji, "Provider has no meaning for emoji");
                Err(DomainError::EmojiMeaningNotFound(emoji.to_string()).into())
            }
        }
    }

    /// Write the fetched meaning and return the value callers should see
    async fn store(&self, emoji: &str, meaning: String) -> ServiceResult<String> {
        let entry = EmojiMeaning::new(emoji, meaning);

        match self.ctx.emoji_settings().write_policy {
            CacheWritePolicy::Overwrite => {
                self.ctx.emoji_repo().upsert(&entry).await?;
                Ok(entry.meaning)
            }
            CacheWritePolicy::InsertIfAbsent => {
                if self.ctx.emoji_repo().insert_if_absent(&entry).await? {
                    return Ok(entry.meaning);
                }

                // Another writer got there first
                match self.ctx.emoji_repo().find(emoji).await? {
                    Some(stored) if stored.is_usable() => {
                        debug!(emoji, "Lost write race, adopting stored meaning");
                        Ok(stored.meaning)
                    }
                    _ => Ok(entry.meaning),
                }
            }
        }
    }

    async fn record_activity(&self, user_id: Snowflake, emoji: &str) {
        let query = EmojiQuery::new(self.ctx.generate_id(), user_id, emoji);

        if let Err(e) = self.ctx.activity_repo().record(&query).await {
            warn!(user_id = %user_id, emoji, error = %e, "Failed to record emoji query");
        }
    }
}
