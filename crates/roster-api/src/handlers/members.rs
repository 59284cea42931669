//! Member handlers

use axum::{extract::State, Json};
use roster_service::{MemberResponse, MemberService, MembersResponse, UpsertMemberRequest};

use crate::extractors::{ManagerUser, PlayerIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/members
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Json<MembersResponse>> {
    let service = MemberService::new(state.service_context());
    Ok(Json(service.list_members().await?))
}

/// PUT /api/members/{id}
pub async fn upsert_member(
    State(state): State<AppState>,
    _manager: ManagerUser,
    PlayerIdPath(member_id): PlayerIdPath,
    ValidatedJson(request): ValidatedJson<UpsertMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let service = MemberService::new(state.service_context());
    Ok(Json(service.upsert_member(&member_id, request).await?))
}
