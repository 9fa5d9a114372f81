//! # emoji-cache
//!
//! Redis layer holding login sessions.
//!
//! - **Connection Pool**: managed Redis connections via deadpool
//! - **Session Storage**: access-token sessions with expiry, revocable one
//!   at a time (logout) or per user (deactivation)
//!
//! ```ignore
//! use emoji_cache::{RedisPool, RedisSessionStore};
//!
//! let pool = RedisPool::from_config(&config.redis)?;
//! let sessions = RedisSessionStore::new(pool);
//! sessions.store(&token, &Session::new(user_id, session_id), ttl).await?;
//! ```

pub mod pool;
pub mod session;

pub use pool::{RedisPool, RedisPoolError, RedisResult, SharedRedisPool};
pub use session::RedisSessionStore;
