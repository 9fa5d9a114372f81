//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, CacheWritePolicy, ConfigError, CorsConfig, DatabaseConfig,
    EmojiCacheConfig, Environment, JwtConfig, ProviderConfig, RateLimitConfig, RedisConfig,
    ServerConfig, SnowflakeConfig,
};
