//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Emoji meaning not found")]
    EmojiMeaningNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Authentication token is invalid or not found.")]
    TokenNotFound,

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("Invalid email or password")]
    InvalidCredentials,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid emoji: {0}")]
    InvalidEmoji(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Failed to fetch emoji meaning from provider")]
    UpstreamUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::EmojiMeaningNotFound(_) => "EMOJI_MEANING_NOT_FOUND",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TokenNotFound => "TOKEN_NOT_FOUND",

            // Authentication
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            // Validation
            Self::InvalidEmoji(_) => "INVALID_EMOJI",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",

            // Infrastructure
            Self::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EmojiMeaningNotFound(_) | Self::UserNotFound(_) | Self::TokenNotFound
        )
    }

    /// Check if this is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidEmoji(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }

    /// Check if the failure originated in the upstream meaning provider
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable(_))
    }
}
