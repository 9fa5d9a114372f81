//! Cursor pagination for the activity log

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use emoji_service::dto::ActivityParams;

use crate::response::ApiError;

/// `?before=<id>&limit=<n>`; the limit is clamped by the service
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination(pub ActivityParams);

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ActivityParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Pagination(params))
    }
}
