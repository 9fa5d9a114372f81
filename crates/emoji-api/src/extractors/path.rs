//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Percent-decoded `{emoji}` segment of `/emoji/interpret/{emoji}`
#[derive(Debug, Clone)]
pub struct EmojiPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for EmojiPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(emoji) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(EmojiPath(emoji))
    }
}
