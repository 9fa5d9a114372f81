//! Authentication extractors
//!
//! Pull the bearer token from the Authorization header and check it against
//! the signing key and the session store.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    typed_header::TypedHeaderRejection,
    TypedHeader,
};
use emoji_core::Snowflake;
use emoji_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

fn header_rejection(rejection: &TypedHeaderRejection) -> ApiError {
    if rejection.is_missing() {
        ApiError::MissingAuth
    } else {
        ApiError::InvalidAuthFormat
    }
}

/// Raw bearer token, not verified
///
/// Used by logout, which must be able to revoke a session even when the
/// token itself is no longer valid.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| header_rejection(&e))?;

        Ok(BearerToken(bearer.token().to_string()))
    }
}

/// Authenticated user extracted from a verified access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Snowflake,
    pub session_id: String,
}

async fn authenticate(state: &AppState, token: &str) -> Result<AuthUser, ApiError> {
    let who = AuthService::new(state.service_context())
        .authenticate(token)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected access token");
            ApiError::from(e)
        })?;

    Ok(AuthUser {
        user_id: who.user_id,
        session_id: who.session_id,
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        authenticate(&AppState::from_ref(state), &token).await
    }
}

/// Optional authenticated user
///
/// `None` when no Authorization header is sent; a header that is present
/// but invalid is still rejected.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn user_id(&self) -> Option<Snowflake> {
        self.0.as_ref().map(|u| u.user_id)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match BearerToken::from_request_parts(parts, state).await {
            Ok(BearerToken(token)) => {
                let user = authenticate(&AppState::from_ref(state), &token).await?;
                Ok(OptionalAuthUser(Some(user)))
            }
            Err(ApiError::MissingAuth) => Ok(OptionalAuthUser(None)),
            Err(e) => Err(e),
        }
    }
}
