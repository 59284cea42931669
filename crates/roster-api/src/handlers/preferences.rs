//! Preference handlers

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use roster_service::{PreferenceResponse, PreferenceService, SetPreferenceRequest};

use crate::extractors::{OptionalAuthUser, PlayerIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/preferences
pub async fn list_preferences(
    State(state): State<AppState>,
) -> ApiResult<Json<BTreeMap<String, String>>> {
    let service = PreferenceService::new(state.service_context());
    Ok(Json(service.list_preferences().await?))
}

/// PUT /api/preferences/{playerId}
pub async fn set_preference(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    PlayerIdPath(player_id): PlayerIdPath,
    ValidatedJson(request): ValidatedJson<SetPreferenceRequest>,
) -> ApiResult<Json<PreferenceResponse>> {
    let service = PreferenceService::new(state.service_context());
    let response = service
        .set_preference(auth.claims(), &player_id, request)
        .await?;
    Ok(Json(response))
}
