//! Emoji meaning entity and input validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::DomainError;

/// Upper bound on the encoded size of a single emoji (long ZWJ sequences fit well below this)
pub const MAX_EMOJI_BYTES: usize = 64;

/// Cached meaning of a single emoji character, keyed by the character itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiMeaning {
    pub emoji_char: String,
    pub meaning: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmojiMeaning {
    pub fn new(emoji_char: impl Into<String>, meaning: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            emoji_char: emoji_char.into(),
            meaning: meaning.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// An empty meaning is treated exactly like a missing entry
    #[inline]
    pub fn is_usable(&self) -> bool {
        !self.meaning.is_empty()
    }
}

/// Where a resolved meaning came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeaningSource {
    Cache,
    External,
}

impl MeaningSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cache => "cache",
            Self::External => "external",
        }
    }
}

impl fmt::Display for MeaningSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that the input is a single emoji-like grapheme cluster
///
/// Keycap sequences such as `#️⃣` start with an ASCII character, so only
/// pure-ASCII input is rejected rather than any ASCII prefix.
pub fn validate_emoji(input: &str) -> Result<(), DomainError> {
    if input.is_empty() {
        return Err(DomainError::InvalidEmoji("emoji must not be empty".to_string()));
    }

    if input.len() > MAX_EMOJI_BYTES {
        return Err(DomainError::InvalidEmoji(format!(
            "emoji must be at most {MAX_EMOJI_BYTES} bytes"
        )));
    }

    if input.graphemes(true).count() != 1 {
        return Err(DomainError::InvalidEmoji(
            "expected exactly one emoji character".to_string(),
        ));
    }

    if input.is_ascii() || input.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(DomainError::InvalidEmoji(format!("not an emoji: {input:?}")));
    }

    Ok(())
}
