//! Test fixtures and response shapes

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            email: format!("test-{}@example.com", uuid::Uuid::new_v4().simple()),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct InterpretResponse {
    pub emoji: String,
    pub meaning: String,
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub emoji_char: String,
    pub meaning: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct ActivityResponse {
    pub activities: Vec<ActivityItem>,
}

#[derive(Debug, Deserialize)]
pub struct UserDetails {
    pub id: String,
    pub email: String,
    pub role: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserResponse {
    pub success: bool,
    pub updated_user_details: UserDetails,
}
