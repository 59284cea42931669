//! Roster handlers
//!
//! Availability and withdrawal accept an optional session; when present, the
//! session's linked player must match the player in the body.

use axum::{extract::State, Json};
use roster_service::{
    AssignRosterRequest, AvailabilityRequest, GameResponse, RosterService, WithdrawRequest,
};

use crate::extractors::{GameIdPath, ManagerUser, OptionalAuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// PUT /api/games/{id}/roster
pub async fn assign_roster(
    State(state): State<AppState>,
    _manager: ManagerUser,
    GameIdPath(game_id): GameIdPath,
    ValidatedJson(request): ValidatedJson<AssignRosterRequest>,
) -> ApiResult<Json<GameResponse>> {
    let service = RosterService::new(state.service_context());
    Ok(Json(service.assign_roster(&game_id, request).await?))
}

/// POST /api/games/{id}/availability
pub async fn set_availability(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    GameIdPath(game_id): GameIdPath,
    ValidatedJson(request): ValidatedJson<AvailabilityRequest>,
) -> ApiResult<Json<GameResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service
        .set_availability(auth.claims(), &game_id, request)
        .await?;
    Ok(Json(response))
}

/// POST /api/games/{id}/withdraw
pub async fn withdraw(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    GameIdPath(game_id): GameIdPath,
    ValidatedJson(request): ValidatedJson<WithdrawRequest>,
) -> ApiResult<Json<GameResponse>> {
    let service = RosterService::new(state.service_context());
    let response = service.withdraw(auth.claims(), &game_id, request).await?;
    Ok(Json(response))
}
