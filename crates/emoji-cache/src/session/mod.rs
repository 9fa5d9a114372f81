//! Session storage module.

mod access_session;

pub use access_session::RedisSessionStore;
