//! reqwest-backed Discord client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use super::DiscordApi;
use crate::error::NotifyError;
use crate::messages::WebhookPayload;

/// Client configuration
#[derive(Debug, Clone)]
pub struct DiscordClientConfig {
    /// Bot REST base, e.g. `https://discord.com/api/v10`
    pub api_base: String,
    /// Bot token; direct messages fail with `BotNotConfigured` when unset
    pub bot_token: Option<String>,
    pub timeout: Duration,
}

impl Default for DiscordClientConfig {
    fn default() -> Self {
        Self {
            api_base: "https://discord.com/api/v10".to_string(),
            bot_token: None,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DmChannel {
    id: String,
}

/// Discord client over HTTPS
#[derive(Clone)]
pub struct HttpDiscordClient {
    http: Client,
    api_base: String,
    bot_token: Option<String>,
}

impl HttpDiscordClient {
    pub fn new(config: DiscordClientConfig) -> Result<Self, NotifyError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token,
        })
    }

    fn bot_authorization(&self) -> Result<String, NotifyError> {
        self.bot_token
            .as_deref()
            .map(|token| format!("Bot {token}"))
            .ok_or(NotifyError::BotNotConfigured)
    }

    async fn open_dm_channel(&self, auth: &str, recipient_id: &str) -> Result<String, NotifyError> {
        let response = self
            .http
            .post(format!("{}/users/@me/channels", self.api_base))
            .header(AUTHORIZATION, auth)
            .json(&json!({ "recipient_id": recipient_id }))
            .send()
            .await?;

        let channel: DmChannel = ensure_success(response).await?.json().await?;
        Ok(channel.id)
    }
}

impl std::fmt::Debug for HttpDiscordClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDiscordClient")
            .field("api_base", &self.api_base)
            .field("bot_token", &self.bot_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Turn a non-2xx response into `NotifyError::Api`
async fn ensure_success(response: Response) -> Result<Response, NotifyError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(NotifyError::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl DiscordApi for HttpDiscordClient {
    #[instrument(skip(self, url, payload))]
    async fn execute_webhook(&self, url: &str, payload: &WebhookPayload) -> Result<(), NotifyError> {
        let response = self.http.post(url).json(payload).send().await?;
        ensure_success(response).await?;
        debug!("Webhook message delivered");
        Ok(())
    }

    #[instrument(skip(self, content))]
    async fn send_direct_message(
        &self,
        discord_user_id: &str,
        content: &str,
    ) -> Result<(), NotifyError> {
        let auth = self.bot_authorization()?;
        let channel_id = self.open_dm_channel(&auth, discord_user_id).await?;

        let response = self
            .http
            .post(format!("{}/channels/{channel_id}/messages", self.api_base))
            .header(AUTHORIZATION, &auth)
            .json(&json!({ "content": content }))
            .send()
            .await?;
        ensure_success(response).await?;

        debug!(channel_id = %channel_id, "Direct message delivered");
        Ok(())
    }
}
