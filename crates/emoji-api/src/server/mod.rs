//! Server setup and initialization
//!
//! Opens the pools, wires the service context, and runs the HTTP server
//! until Ctrl-C or SIGTERM.

use std::sync::Arc;

use axum::Router;
use emoji_cache::{RedisPool, RedisSessionStore};
use emoji_common::{AppConfig, AppError, JwtService};
use emoji_core::SnowflakeGenerator;
use emoji_db::{
    create_pool, run_migrations, PgActivityRepository, PgEmojiRepository, PgUserRepository,
};
use emoji_provider::HttpMeaningProvider;
use emoji_service::{EmojiSettings, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

use crate::middleware::{apply_middleware, apply_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();

    let api = apply_rate_limit(create_router(), &config.rate_limit)?;
    let router = apply_middleware(
        api.merge(health_routes()),
        &config.cors,
        config.app.env.is_production(),
    );

    Ok(router.with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Config(format!("PostgreSQL: {e}")))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Config(format!("migrations: {e}")))?;
    }

    info!("Connecting to Redis...");
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool.clone());

    let provider = HttpMeaningProvider::from_config(&config.provider)
        .map_err(|e| AppError::Config(e.to_string()))?;
    info!(url = %provider.url(), timeout_ms = config.provider.timeout_ms, "Meaning provider configured");

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .emoji_repo(Arc::new(PgEmojiRepository::new(pool.clone())))
        .activity_repo(Arc::new(PgActivityRepository::new(pool.clone())))
        .session_store(Arc::new(RedisSessionStore::new(redis_pool)))
        .provider(Arc::new(provider))
        .jwt_service(Arc::new(JwtService::new(
            &config.jwt.secret,
            config.jwt.access_token_expiry,
        )))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)))
        .emoji_settings(EmojiSettings {
            provider_timeout: config.provider.timeout(),
            write_policy: config.emoji_cache.write_policy,
        })
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool, shared_redis))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let pool = state.pool().clone();
    let app = create_app(state)?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    info!("Closing database pool");
    pool.close().await;

    served.map_err(AppError::internal)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
