//! Emoji lookup handler

use axum::{extract::State, Json};
use emoji_service::dto::InterpretEmojiResponse;
use emoji_service::EmojiService;

use crate::extractors::{EmojiPath, OptionalAuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Explain what an emoji means
///
/// GET /emoji/interpret/{emoji}
pub async fn interpret_emoji(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    EmojiPath(emoji): EmojiPath,
) -> ApiResult<Json<InterpretEmojiResponse>> {
    let service = EmojiService::new(state.service_context());
    let response = service.interpret(&emoji, auth.user_id()).await?;
    Ok(Json(response))
}
