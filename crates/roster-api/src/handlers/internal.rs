//! Internal handlers
//!
//! Called by the reminder job with the `x-internal-token` header.

use axum::{extract::State, Json};
use roster_notify::DeadLetter;
use roster_service::{
    DiscordIdResponse, GameResponse, ReminderRunResponse, ReminderService, SuccessResponse,
};

use crate::extractors::{GameIdPath, InternalCaller, PlayerIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/internal/pending-reminders
pub async fn pending_reminders(
    State(state): State<AppState>,
    _caller: InternalCaller,
) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = ReminderService::new(state.service_context());
    Ok(Json(service.pending_reminders().await?))
}

/// POST /api/internal/mark-reminded/{id}
pub async fn mark_reminded(
    State(state): State<AppState>,
    _caller: InternalCaller,
    GameIdPath(game_id): GameIdPath,
) -> ApiResult<Json<SuccessResponse>> {
    let service = ReminderService::new(state.service_context());
    Ok(Json(service.mark_reminded(&game_id).await?))
}

/// GET /api/internal/user-discord/{playerId}
pub async fn user_discord_id(
    State(state): State<AppState>,
    _caller: InternalCaller,
    PlayerIdPath(player_id): PlayerIdPath,
) -> ApiResult<Json<DiscordIdResponse>> {
    let service = ReminderService::new(state.service_context());
    Ok(Json(service.discord_id_for_player(&player_id).await?))
}

/// POST /api/internal/send-reminders
pub async fn send_reminders(
    State(state): State<AppState>,
    _caller: InternalCaller,
) -> ApiResult<Json<ReminderRunResponse>> {
    let service = ReminderService::new(state.service_context());
    Ok(Json(service.send_reminders().await?))
}

/// GET /api/internal/dead-letters
pub async fn dead_letters(
    State(state): State<AppState>,
    _caller: InternalCaller,
) -> Json<Vec<DeadLetter>> {
    let service = ReminderService::new(state.service_context());
    Json(service.dead_letters())
}
