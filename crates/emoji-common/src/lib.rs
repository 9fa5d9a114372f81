//! # emoji-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{hash_password, validate_password, verify_password, Claims, IssuedToken, JwtService};
pub use config::{
    AppConfig, AppSettings, CacheWritePolicy, ConfigError, CorsConfig, DatabaseConfig,
    EmojiCacheConfig, Environment, JwtConfig, ProviderConfig, RateLimitConfig, RedisConfig,
    ServerConfig, SnowflakeConfig,
};
pub use error::{domain_status, AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
