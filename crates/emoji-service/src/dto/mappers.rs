//! Domain to DTO mappers

use emoji_core::{ActivityEntry, User};

use super::responses::{ActivityItem, InterpretEmojiResponse, RegisterResponse, UserDetails};
use crate::services::Resolution;

impl From<Resolution> for InterpretEmojiResponse {
    fn from(resolution: Resolution) -> Self {
        Self {
            emoji: resolution.emoji,
            meaning: resolution.meaning,
            source: resolution.source,
        }
    }
}

impl From<&User> for UserDetails {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            avatar_url: user.avatar_url.clone(),
        }
    }
}

impl From<&User> for RegisterResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
            message: "User successfully registered.".to_string(),
        }
    }
}

impl From<ActivityEntry> for ActivityItem {
    fn from(entry: ActivityEntry) -> Self {
        Self {
            emoji_char: entry.emoji_char,
            meaning: entry.meaning,
            timestamp: entry.created_at,
        }
    }
}
