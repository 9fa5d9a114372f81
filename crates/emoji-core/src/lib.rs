//! # emoji-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! upstream meaning provider port.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    validate_emoji, ActivityEntry, EmojiMeaning, EmojiQuery, MeaningSource, Role,
    RoleParseError, Session, User, MAX_EMOJI_BYTES,
};
pub use error::DomainError;
pub use traits::{
    ActivityQuery, ActivityRepository, EmojiRepository, MeaningProvider, RepoResult,
    SessionRepository, UserRepository,
};
pub use value_objects::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
