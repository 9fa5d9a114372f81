//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in emoji-core.

mod activity;
mod emoji;
mod error;
mod user;

pub use activity::PgActivityRepository;
pub use emoji::PgEmojiRepository;
pub use user::PgUserRepository;
