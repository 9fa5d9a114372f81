use emoji_core::entities::ActivityEntry;
use emoji_core::value_objects::Snowflake;

use crate::models::ActivityRowModel;

impl From<ActivityRowModel> for ActivityEntry {
    fn from(row: ActivityRowModel) -> Self {
        ActivityEntry {
            query_id: Snowflake::new(row.id),
            emoji_char: row.emoji_char,
            meaning: row.meaning,
            created_at: row.created_at,
        }
    }
}
