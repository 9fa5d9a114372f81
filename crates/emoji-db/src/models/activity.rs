//! Activity listing row

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// `emoji_queries` joined with `emoji_meanings`
#[derive(Debug, Clone, FromRow)]
pub struct ActivityRowModel {
    pub id: i64,
    pub emoji_char: String,
    pub meaning: String,
    pub created_at: DateTime<Utc>,
}
