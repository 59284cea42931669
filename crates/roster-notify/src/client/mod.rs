//! Discord REST client
//!
//! [`DiscordApi`] is the seam between the dispatcher and the network;
//! [`HttpDiscordClient`] is the production implementation.

mod http;

pub use http::{DiscordClientConfig, HttpDiscordClient};

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::messages::WebhookPayload;

/// Outbound Discord operations
#[async_trait]
pub trait DiscordApi: Send + Sync {
    /// Post a message through an incoming webhook URL
    async fn execute_webhook(&self, url: &str, payload: &WebhookPayload) -> Result<(), NotifyError>;

    /// Send a direct message from the bot to a Discord user
    async fn send_direct_message(
        &self,
        discord_user_id: &str,
        content: &str,
    ) -> Result<(), NotifyError>;
}
