//! PostgreSQL implementation of EmojiRepository
//!
//! `emoji_char` is the primary key, so both write paths are single atomic
//! statements keyed on it.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use emoji_core::entities::EmojiMeaning;
use emoji_core::traits::{EmojiRepository, RepoResult};

use crate::models::EmojiMeaningModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgEmojiRepository {
    pool: PgPool,
}

impl PgEmojiRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmojiRepository for PgEmojiRepository {
    #[instrument(skip(self))]
    async fn find(&self, emoji_char: &str) -> RepoResult<Option<EmojiMeaning>> {
        let row = sqlx::query_as::<_, EmojiMeaningModel>(
            r"
            SELECT emoji_char, meaning, created_at, updated_at
            FROM emoji_meanings
            WHERE emoji_char = $1
            ",
        )
        .bind(emoji_char)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(EmojiMeaning::from))
    }

    #[instrument(skip(self, entry), fields(emoji = %entry.emoji_char))]
    async fn upsert(&self, entry: &EmojiMeaning) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO emoji_meanings (emoji_char, meaning, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (emoji_char)
            DO UPDATE SET meaning = EXCLUDED.meaning, updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(&entry.emoji_char)
        .bind(&entry.meaning)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, entry), fields(emoji = %entry.emoji_char))]
    async fn insert_if_absent(&self, entry: &EmojiMeaning) -> RepoResult<bool> {
        // An empty stored meaning counts as absent and may be filled
        let result = sqlx::query(
            r"
            INSERT INTO emoji_meanings (emoji_char, meaning, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (emoji_char)
            DO UPDATE SET meaning = EXCLUDED.meaning, updated_at = EXCLUDED.updated_at
            WHERE emoji_meanings.meaning = ''
            ",
        )
        .bind(&entry.emoji_char)
        .bind(&entry.meaning)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
