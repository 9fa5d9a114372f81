//! Service context - dependency container for services
//!
//! Holds the repositories, the session store, the upstream provider, and the
//! id/token machinery. Everything is trait-object backed so tests can swap in
//! in-memory fakes.

use std::sync::Arc;
use std::time::Duration;

use emoji_common::{CacheWritePolicy, JwtService};
use emoji_core::traits::{
    ActivityRepository, EmojiRepository, MeaningProvider, SessionRepository, UserRepository,
};
use emoji_core::{Snowflake, SnowflakeGenerator};

use super::error::{ServiceError, ServiceResult};

/// Tunables for the emoji resolution flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiSettings {
    /// Upper bound on a single upstream lookup
    pub provider_timeout: Duration,
    pub write_policy: CacheWritePolicy,
}

impl Default for EmojiSettings {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_millis(5000),
            write_policy: CacheWritePolicy::default(),
        }
    }
}

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    emoji_repo: Arc<dyn EmojiRepository>,
    activity_repo: Arc<dyn ActivityRepository>,

    // Session registry
    session_store: Arc<dyn SessionRepository>,

    // Upstream
    provider: Arc<dyn MeaningProvider>,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    emoji_settings: EmojiSettings,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn emoji_repo(&self) -> &dyn EmojiRepository {
        self.emoji_repo.as_ref()
    }

    pub fn activity_repo(&self) -> &dyn ActivityRepository {
        self.activity_repo.as_ref()
    }

    /// Get the access-token session store
    pub fn session_store(&self) -> &dyn SessionRepository {
        self.session_store.as_ref()
    }

    /// Get the upstream meaning provider
    pub fn provider(&self) -> &dyn MeaningProvider {
        self.provider.as_ref()
    }

    // === Services ===

    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    pub fn emoji_settings(&self) -> EmojiSettings {
        self.emoji_settings
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("worker_id", &self.snowflake_generator.worker_id())
            .field("emoji_settings", &self.emoji_settings)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    emoji_repo: Option<Arc<dyn EmojiRepository>>,
    activity_repo: Option<Arc<dyn ActivityRepository>>,
    session_store: Option<Arc<dyn SessionRepository>>,
    provider: Option<Arc<dyn MeaningProvider>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    emoji_settings: EmojiSettings,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn emoji_repo(mut self, repo: Arc<dyn EmojiRepository>) -> Self {
        self.emoji_repo = Some(repo);
        self
    }

    pub fn activity_repo(mut self, repo: Arc<dyn ActivityRepository>) -> Self {
        self.activity_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionRepository>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn provider(mut self, provider: Arc<dyn MeaningProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn emoji_settings(mut self, settings: EmojiSettings) -> Self {
        self.emoji_settings = settings;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            user_repo: required(self.user_repo, "user_repo")?,
            emoji_repo: required(self.emoji_repo, "emoji_repo")?,
            activity_repo: required(self.activity_repo, "activity_repo")?,
            session_store: required(self.session_store, "session_store")?,
            provider: required(self.provider, "provider")?,
            jwt_service: required(self.jwt_service, "jwt_service")?,
            snowflake_generator: required(self.snowflake_generator, "snowflake_generator")?,
            emoji_settings: self.emoji_settings,
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
}
