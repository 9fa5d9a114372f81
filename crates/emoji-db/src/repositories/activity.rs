//! PostgreSQL implementation of ActivityRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use emoji_core::entities::{ActivityEntry, EmojiQuery};
use emoji_core::traits::{ActivityQuery, ActivityRepository, RepoResult};
use emoji_core::value_objects::Snowflake;

use crate::models::ActivityRowModel;

use super::error::map_db_error;

#[derive(Clone)]
pub struct PgActivityRepository {
    pool: PgPool,
}

impl PgActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityRepository for PgActivityRepository {
    #[instrument(skip(self, query), fields(user_id = %query.user_id, emoji = %query.emoji_char))]
    async fn record(&self, query: &EmojiQuery) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO emoji_queries (id, user_id, emoji_char, created_at)
            VALUES ($1, $2, $3, $4)
            ",
        )
        .bind(query.id.into_inner())
        .bind(query.user_id.into_inner())
        .bind(&query.emoji_char)
        .bind(query.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, user_id: Snowflake, query: ActivityQuery) -> RepoResult<Vec<ActivityEntry>> {
        let rows = sqlx::query_as::<_, ActivityRowModel>(
            r"
            SELECT q.id, q.emoji_char, m.meaning, q.created_at
            FROM emoji_queries q
            JOIN emoji_meanings m ON m.emoji_char = q.emoji_char
            WHERE q.user_id = $1
              AND ($2::BIGINT IS NULL OR q.id < $2)
            ORDER BY q.id DESC
            LIMIT $3
            ",
        )
        .bind(user_id.into_inner())
        .bind(query.before.map(Snowflake::into_inner))
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ActivityEntry::from).collect())
    }
}
