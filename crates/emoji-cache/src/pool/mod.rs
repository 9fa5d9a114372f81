//! Redis connection pool module.

mod redis_pool;

pub use redis_pool::{RedisPool, RedisPoolError, RedisResult, SharedRedisPool};
