//! Notification errors

use thiserror::Error;

/// Outbound messaging failures
///
/// These are only ever logged and recorded as dead letters.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Discord API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Discord bot token not configured")]
    BotNotConfigured,

    #[error("Notification queue is full")]
    QueueFull,

    #[error("Notification queue is closed")]
    QueueClosed,
}

impl NotifyError {
    /// Short machine-readable tag, used in dead-letter entries
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Http(_) => "HTTP_ERROR",
            Self::Api { .. } => "DISCORD_API_ERROR",
            Self::BotNotConfigured => "BOT_NOT_CONFIGURED",
            Self::QueueFull => "QUEUE_FULL",
            Self::QueueClosed => "QUEUE_CLOSED",
        }
    }
}
