//! Interpretation activity log entities

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// One interpretation request made by a user (append-only)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiQuery {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub emoji_char: String,
    pub created_at: DateTime<Utc>,
}

impl EmojiQuery {
    pub fn new(id: Snowflake, user_id: Snowflake, emoji_char: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            emoji_char: emoji_char.into(),
            created_at: Utc::now(),
        }
    }
}

/// Activity record joined with the meaning currently cached for its emoji
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub query_id: Snowflake,
    pub emoji_char: String,
    pub meaning: String,
    pub created_at: DateTime<Utc>,
}
