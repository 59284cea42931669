//! Webhook settings handlers

use axum::{extract::State, Json};
use roster_service::{SetWebhookRequest, SettingsService, WebhookStatusResponse};

use crate::extractors::{ManagerUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// GET /api/webhook
pub async fn get_webhook(State(state): State<AppState>) -> ApiResult<Json<WebhookStatusResponse>> {
    let service = SettingsService::new(state.service_context());
    Ok(Json(service.webhook_status().await?))
}

/// PUT /api/webhook
pub async fn set_webhook(
    State(state): State<AppState>,
    _manager: ManagerUser,
    ValidatedJson(request): ValidatedJson<SetWebhookRequest>,
) -> ApiResult<Json<WebhookStatusResponse>> {
    let service = SettingsService::new(state.service_context());
    Ok(Json(service.set_webhook(request).await?))
}
