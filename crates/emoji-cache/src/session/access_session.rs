//! Access-token sessions in Redis.
//!
//! Layout:
//! - `session:{token}` → JSON [`Session`], expiring with the token
//! - `user_sessions:{user_id}` → set of that user's live tokens

use async_trait::async_trait;
use redis::AsyncCommands;
use std::time::Duration;

use emoji_core::entities::Session;
use emoji_core::traits::{RepoResult, SessionRepository};
use emoji_core::value_objects::Snowflake;

use crate::pool::RedisPool;

const SESSION_PREFIX: &str = "session:";
const USER_SESSIONS_PREFIX: &str = "user_sessions:";

/// Redis-backed [`SessionRepository`]
#[derive(Clone, Debug)]
pub struct RedisSessionStore {
    pool: RedisPool,
}

impl RedisSessionStore {
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    fn user_key(user_id: Snowflake) -> String {
        format!("{USER_SESSIONS_PREFIX}{user_id}")
    }
}

#[async_trait]
impl SessionRepository for RedisSessionStore {
    async fn store(&self, token: &str, session: &Session, ttl: Duration) -> RepoResult<()> {
        let payload = RedisPool::to_json(session)?;
        let ttl_secs = ttl.as_secs().max(1);
        let user_key = Self::user_key(session.user_id);

        let mut conn = self.pool.get().await?;
        redis::pipe()
            .atomic()
            .set_ex(Self::key(token), payload, ttl_secs)
            .ignore()
            .sadd(&user_key, token)
            .ignore()
            .expire(&user_key, ttl_secs as i64)
            .ignore()
            .query_async::<()>(&mut conn)
            .await
            .map_err(crate::RedisPoolError::from)?;

        tracing::debug!(
            user_id = %session.user_id,
            session_id = %session.session_id,
            ttl_secs,
            "Stored session"
        );
        Ok(())
    }

    async fn get(&self, token: &str) -> RepoResult<Option<Session>> {
        Ok(self.pool.get_json(&Self::key(token)).await?)
    }

    async fn revoke(&self, token: &str) -> RepoResult<bool> {
        let Some(session) = self.get(token).await? else {
            return Ok(false);
        };

        let mut conn = self.pool.get().await?;
        let (deleted, _): (i64, i64) = redis::pipe()
            .atomic()
            .del(Self::key(token))
            .srem(Self::user_key(session.user_id), token)
            .query_async(&mut conn)
            .await
            .map_err(crate::RedisPoolError::from)?;

        tracing::debug!(user_id = %session.user_id, session_id = %session.session_id, "Revoked session");
        Ok(deleted > 0)
    }

    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<u64> {
        let user_key = Self::user_key(user_id);
        let mut conn = self.pool.get().await?;

        let tokens: Vec<String> = conn
            .smembers(&user_key)
            .await
            .map_err(crate::RedisPoolError::from)?;

        let mut removed = 0;
        if !tokens.is_empty() {
            let keys: Vec<String> = tokens.iter().map(|t| Self::key(t)).collect();
            removed = conn
                .del::<_, u64>(keys)
                .await
                .map_err(crate::RedisPoolError::from)?;
        }
        conn.del::<_, ()>(&user_key)
            .await
            .map_err(crate::RedisPoolError::from)?;

        tracing::info!(user_id = %user_id, removed, "Revoked all sessions for user");
        Ok(removed)
    }
}
