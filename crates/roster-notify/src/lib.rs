//! # roster-notify
//!
//! Best-effort Discord delivery for the roster backend.
//!
//! Callers build an owned [`Notification`] and hand it to the
//! [`NotificationDispatcher`], which queues it and delivers it on a detached
//! task. Delivery failures are logged and kept in a [`DeadLetterLog`]; they
//! never reach the caller.

pub mod client;
pub mod dispatch;
pub mod error;
pub mod messages;

pub use client::{DiscordApi, DiscordClientConfig, HttpDiscordClient};
pub use dispatch::{DeadLetter, DeadLetterLog, DispatcherConfig, Notification, NotificationDispatcher};
pub use error::NotifyError;
pub use messages::{
    game_embed, new_game_payload, reminder_text, summary_payload, withdrawal_text, Embed,
    EmbedField, EmbedFooter, MemberNames, WebhookPayload,
};
