//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate`; the handler layer runs
//! validation before the service is called.

use emoji_core::Role;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    /// Defaults to `USER`
    #[serde(default)]
    pub role: Option<Role>,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,

    pub role: Option<Role>,

    #[validate(url(message = "Invalid avatar URL"))]
    pub avatar_url: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.role.is_none()
            && self.avatar_url.is_none()
    }
}

/// Query string for `GET /user/activity`
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ActivityParams {
    /// Only return records older than this id
    pub before: Option<emoji_core::Snowflake>,
    pub limit: Option<i64>,
}
