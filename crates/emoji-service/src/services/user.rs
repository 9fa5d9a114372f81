//! User service
//!
//! Profile updates and account deactivation for the authenticated user.

use emoji_common::{hash_password, validate_password};
use emoji_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{MessageResponse, UpdateUserRequest, UpdateUserResponse, UserDetails};

use super::auth::normalize_email;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply the fields present in `request` to the user's profile
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<UpdateUserResponse> {
        request.validate()?;
        if let Some(password) = request.password.as_deref() {
            validate_password(password)?;
        }

        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        if request.is_empty() {
            return Ok(UpdateUserResponse {
                success: true,
                updated_user_details: UserDetails::from(&user),
            });
        }

        if let Some(email) = request.email.as_deref().map(normalize_email) {
            if email != user.email {
                if self.ctx.user_repo().email_exists(&email).await? {
                    warn!(user_id = %user_id, "Email change rejected: already in use");
                    return Err(DomainError::EmailAlreadyExists.into());
                }
                user.set_email(email);
            }
        }

        if let Some(role) = request.role {
            user.set_role(role);
        }

        if let Some(avatar_url) = request.avatar_url {
            user.set_avatar_url(Some(avatar_url));
        }

        let password_hash = request.password.as_deref().map(hash_password).transpose()?;

        self.ctx
            .user_repo()
            .update(&user, password_hash.as_deref())
            .await?;

        info!(user_id = %user_id, "User profile updated");

        Ok(UpdateUserResponse {
            success: true,
            updated_user_details: UserDetails::from(&user),
        })
    }

    /// End all of the account's sessions, then soft-delete it
    ///
    /// Sessions go first so a failed revoke leaves the account intact
    /// rather than deleted with live tokens.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, user_id: Snowflake) -> ServiceResult<MessageResponse> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let revoked = self.ctx.session_store().revoke_all_for_user(user_id).await?;
        self.ctx.user_repo().delete(user_id).await?;

        info!(user_id = %user_id, revoked, "User deactivated");

        Ok(MessageResponse::new("User account deactivated."))
    }
}
