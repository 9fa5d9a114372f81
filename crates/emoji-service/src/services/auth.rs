//! Authentication service
//!
//! Handles registration, login, logout, and access-token verification.
//! Each issued token is backed by a session entry so it can be revoked
//! before it expires.

use std::time::Duration;

use emoji_common::{hash_password, verify_password, AppError};
use emoji_core::{DomainError, Role, Session, Snowflake, User};
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Identity attached to a verified access token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Snowflake,
    pub session_id: String,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        request.validate()?;
        emoji_common::validate_password(&request.password)?;

        let email = normalize_email(&request.email);

        if self.ctx.user_repo().email_exists(&email).await? {
            warn!("Registration rejected: email already in use");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let user = User::new(
            self.ctx.generate_id(),
            email,
            request.role.unwrap_or(Role::User),
        );

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(RegisterResponse::from(&user))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let email = normalize_email(&request.email);

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                DomainError::InvalidCredentials
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                DomainError::InvalidCredentials
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(DomainError::InvalidCredentials.into());
        }

        let session_id = Uuid::new_v4().to_string();
        let issued = self.ctx.jwt_service().issue(user.id, &session_id)?;

        let ttl = Duration::from_secs(u64::try_from(issued.expires_in).unwrap_or(0));
        self.ctx
            .session_store()
            .store(&issued.token, &Session::new(user.id, session_id), ttl)
            .await?;

        info!(user_id = %user.id, "User logged in successfully");

        Ok(LoginResponse::bearer(issued.token, issued.expires_in))
    }

    /// Revoke the session behind `token`
    ///
    /// The token is not signature-checked first: any string that names a live
    /// session is enough to end it.
    #[instrument(skip_all)]
    pub async fn logout(&self, token: &str) -> ServiceResult<MessageResponse> {
        if !self.ctx.session_store().revoke(token).await? {
            warn!("Logout failed: no session for token");
            return Err(DomainError::TokenNotFound.into());
        }

        info!("User logged out");

        Ok(MessageResponse::new("User logged out successfully."))
    }

    /// Verify a bearer token and its session
    #[instrument(skip_all)]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<AuthenticatedUser> {
        let claims = self.ctx.jwt_service().validate(token)?;
        let user_id = claims.user_id()?;

        let session = self
            .ctx
            .session_store()
            .get(token)
            .await?
            .ok_or(AppError::InvalidToken)?;

        if session.user_id != user_id || session.session_id != claims.sid {
            warn!(user_id = %user_id, "Session does not match token claims");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        Ok(AuthenticatedUser {
            user_id,
            session_id: session.session_id,
        })
    }
}

/// Emails are compared case-insensitively
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
