//! Route definitions

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, emoji, health, users};
use crate::state::AppState;

/// Create the API router (excluding health, which skips rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(emoji_routes())
        .merge(auth_routes())
        .merge(user_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn emoji_routes() -> Router<AppState> {
    Router::new().route("/emoji/interpret/:emoji", get(emoji::interpret_emoji))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user/register", post(auth::register))
        .route("/user/update", put(users::update_current_user))
        .route("/user", delete(users::deactivate_current_user))
        .route("/user/activity", get(users::get_activity))
}
