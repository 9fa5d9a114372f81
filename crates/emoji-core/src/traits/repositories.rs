//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer states what it needs; `emoji-db` and `emoji-cache`
//! provide the implementations.

use async_trait::async_trait;
use std::time::Duration;

use crate::entities::{ActivityEntry, EmojiMeaning, EmojiQuery, Session, User};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find an active user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find an active user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Save email, role and avatar, and the password hash when one is given,
    /// in a single write
    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;
}

// ============================================================================
// Emoji Meaning Repository
// ============================================================================

#[async_trait]
pub trait EmojiRepository: Send + Sync {
    /// Fetch the cached entry for a character, if any
    async fn find(&self, emoji_char: &str) -> RepoResult<Option<EmojiMeaning>>;

    /// Insert or overwrite the meaning for `entry.emoji_char`
    async fn upsert(&self, entry: &EmojiMeaning) -> RepoResult<()>;

    /// Store the meaning only when no usable entry exists yet.
    ///
    /// Returns `false` when another writer got there first.
    async fn insert_if_absent(&self, entry: &EmojiMeaning) -> RepoResult<bool>;
}

// ============================================================================
// Activity Repository
// ============================================================================

/// Cursor pagination for activity listings
#[derive(Debug, Clone, Copy)]
pub struct ActivityQuery {
    /// Only return records with an id strictly lower than this one
    pub before: Option<Snowflake>,
    pub limit: i64,
}

impl ActivityQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Build a query with the limit clamped to `1..=MAX_LIMIT`
    pub fn new(before: Option<Snowflake>, limit: Option<i64>) -> Self {
        Self {
            before,
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for ActivityQuery {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Append one interpretation record
    async fn record(&self, query: &EmojiQuery) -> RepoResult<()>;

    /// List a user's records newest first, joined with the current meanings
    async fn list(&self, user_id: Snowflake, query: ActivityQuery) -> RepoResult<Vec<ActivityEntry>>;
}

// ============================================================================
// Session Repository
// ============================================================================

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Register a session under its access token
    async fn store(&self, token: &str, session: &Session, ttl: Duration) -> RepoResult<()>;

    /// Look up a live session
    async fn get(&self, token: &str) -> RepoResult<Option<Session>>;

    /// Remove a session, returning whether it existed
    async fn revoke(&self, token: &str) -> RepoResult<bool>;

    /// Remove every session belonging to a user, returning how many were removed
    async fn revoke_all_for_user(&self, user_id: Snowflake) -> RepoResult<u64>;
}
