//! User handlers
//!
//! Endpoints that act on the authenticated user.

use axum::{extract::State, Json};
use emoji_service::dto::{ActivityResponse, MessageResponse, UpdateUserRequest, UpdateUserResponse};
use emoji_service::{ActivityService, UserService};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Update the current user's profile
///
/// PUT /user/update
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UpdateUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Deactivate the current user
///
/// DELETE /user
pub async fn deactivate_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.deactivate(auth.user_id).await?;
    Ok(Json(response))
}

/// List the current user's past lookups, newest first
///
/// GET /user/activity
pub async fn get_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(params): Pagination,
) -> ApiResult<Json<ActivityResponse>> {
    let service = ActivityService::new(state.service_context());
    let response = service.list(auth.user_id, params).await?;
    Ok(Json(response))
}
