//! # emoji-db
//!
//! Database layer implementing the `emoji-core` repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ```rust,ignore
//! use emoji_db::{create_pool, PgEmojiRepository};
//! use emoji_core::traits::EmojiRepository;
//!
//! let pool = create_pool(&config.database).await?;
//! let emojis = PgEmojiRepository::new(pool);
//! let cached = emojis.find("❤️").await?;
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{PgActivityRepository, PgEmojiRepository, PgUserRepository};
