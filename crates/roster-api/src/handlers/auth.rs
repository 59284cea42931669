//! Account handlers
//!
//! Endpoints for the current session, logout and player linking.

use axum::{extract::State, Json};
use roster_service::{AuthService, LinkPlayerRequest, LinkResponse, MeResponse};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Current user, or `{"authenticated": false}` without a session
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
) -> ApiResult<Json<MeResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.me(auth.claims()).await?;
    Ok(Json(response))
}

/// Link the signed-in Discord account to a player id
///
/// POST /auth/link
pub async fn link_player(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<LinkPlayerRequest>,
) -> ApiResult<Json<LinkResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.link_player(&auth.claims, request).await?;
    Ok(Json(response))
}

/// End the session; always 204
///
/// Sessions are signed bearer tokens with no server-side record. The
/// client drops its token.
///
/// POST /auth/logout
pub async fn logout() -> NoContent {
    tracing::debug!("Logout requested");
    NoContent
}
