//! Emoji meaning database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `emoji_meanings` table
#[derive(Debug, Clone, FromRow)]
pub struct EmojiMeaningModel {
    pub emoji_char: String,
    pub meaning: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
