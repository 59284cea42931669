//! Settings service
//!
//! Currently a single setting: the Discord webhook URL.

use tracing::{info, instrument};

use crate::dto::{SetWebhookRequest, WebhookStatusResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub const WEBHOOK_SETTING: &str = "discord_webhook";

const PREVIEW_CHARS: usize = 10;

/// `****` plus the last ten characters; `None` for short values
pub fn mask_webhook(url: &str) -> Option<String> {
    let count = url.chars().count();
    if count <= PREVIEW_CHARS {
        return None;
    }
    let tail: String = url.chars().skip(count - PREVIEW_CHARS).collect();
    Some(format!("****{tail}"))
}

pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Configured webhook URL, if any
    pub async fn webhook_url(&self) -> ServiceResult<Option<String>> {
        Ok(self
            .ctx
            .settings_repo()
            .get(WEBHOOK_SETTING)
            .await?
            .filter(|url| !url.trim().is_empty()))
    }

    /// Whether a webhook is set, with a masked preview
    #[instrument(skip(self))]
    pub async fn webhook_status(&self) -> ServiceResult<WebhookStatusResponse> {
        let url = self.webhook_url().await?;
        Ok(WebhookStatusResponse {
            configured: url.is_some(),
            preview: url.as_deref().and_then(mask_webhook),
        })
    }

    /// Replace the webhook URL; empty clears it
    #[instrument(skip(self, request))]
    pub async fn set_webhook(&self, request: SetWebhookRequest) -> ServiceResult<WebhookStatusResponse> {
        let url = request.webhook.trim();
        self.ctx.settings_repo().set(WEBHOOK_SETTING, url).await?;

        info!(configured = !url.is_empty(), "Discord webhook updated");
        self.webhook_status().await
    }
}
