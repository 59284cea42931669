//! Bounded queue feeding a task-per-job runner

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, info, warn};

use super::{DeadLetterLog, Notification};
use crate::client::DiscordApi;
use crate::error::NotifyError;
use crate::messages::{new_game_payload, summary_payload, withdrawal_text};

/// Dispatcher sizing
#[derive(Debug, Clone, Copy)]
pub struct DispatcherConfig {
    pub queue_capacity: usize,
    pub dead_letter_capacity: usize,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 256,
            dead_letter_capacity: 100,
        }
    }
}

/// Fire-and-forget notification sender
///
/// Cloning is cheap; all clones feed the same runner.
#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: mpsc::Sender<Notification>,
    dead_letters: Arc<DeadLetterLog>,
}

impl NotificationDispatcher {
    /// Start the runner on the current tokio runtime
    pub fn spawn(api: Arc<dyn DiscordApi>, config: DispatcherConfig) -> Self {
        let (sender, receiver) = mpsc::channel(config.queue_capacity.max(1));
        let dead_letters = Arc::new(DeadLetterLog::new(config.dead_letter_capacity));

        tokio::spawn(run(receiver, api, Arc::clone(&dead_letters)));
        info!(
            queue_capacity = config.queue_capacity,
            "Notification dispatcher started"
        );

        Self {
            sender,
            dead_letters,
        }
    }

    /// Enqueue a notification without waiting
    ///
    /// Never fails from the caller's point of view: a full or closed queue is
    /// logged and recorded as a dead letter.
    pub fn dispatch(&self, notification: Notification) {
        let kind = notification.kind();
        match self.sender.try_send(notification) {
            Ok(()) => debug!(kind, "Notification queued"),
            Err(TrySendError::Full(dropped)) => {
                warn!(kind, recipient = %dropped.target(), "Notification queue full, dropping");
                self.dead_letters
                    .record(kind, dropped.target(), &NotifyError::QueueFull);
            }
            Err(TrySendError::Closed(dropped)) => {
                warn!(kind, recipient = %dropped.target(), "Notification queue closed, dropping");
                self.dead_letters
                    .record(kind, dropped.target(), &NotifyError::QueueClosed);
            }
        }
    }

    #[must_use]
    pub fn dead_letters(&self) -> &DeadLetterLog {
        &self.dead_letters
    }
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher")
            .field("dead_letters", &self.dead_letters.len())
            .finish_non_exhaustive()
    }
}

async fn run(
    mut receiver: mpsc::Receiver<Notification>,
    api: Arc<dyn DiscordApi>,
    dead_letters: Arc<DeadLetterLog>,
) {
    while let Some(notification) = receiver.recv().await {
        let api = Arc::clone(&api);
        let dead_letters = Arc::clone(&dead_letters);
        tokio::spawn(async move {
            deliver(api.as_ref(), notification, &dead_letters).await;
        });
    }
    debug!("Notification dispatcher stopped");
}

fn record_failure(dead_letters: &DeadLetterLog, kind: &str, target: String, error: &NotifyError) {
    warn!(kind, recipient = %target, error = %error, "Notification delivery failed");
    dead_letters.record(kind, target, error);
}

async fn deliver(api: &dyn DiscordApi, notification: Notification, dead_letters: &DeadLetterLog) {
    let kind = notification.kind();
    let target = notification.target();

    match notification {
        Notification::GameSummary {
            webhook_url,
            game,
            names,
            mentions,
        } => {
            let payload = summary_payload(&game, &names, &mentions);
            if let Err(e) = api.execute_webhook(&webhook_url, &payload).await {
                record_failure(dead_letters, kind, target, &e);
            }
        }
        Notification::NewGame {
            webhook_url,
            game,
            names,
        } => {
            let payload = new_game_payload(&game, &names);
            if let Err(e) = api.execute_webhook(&webhook_url, &payload).await {
                record_failure(dead_letters, kind, target, &e);
            }
        }
        Notification::WithdrawalAlert {
            game,
            player_name,
            manager_ids,
        } => {
            let content = withdrawal_text(&game, &player_name);
            // Each manager is attempted once; partial delivery is final
            for manager_id in &manager_ids {
                if let Err(e) = api.send_direct_message(manager_id, &content).await {
                    record_failure(dead_letters, kind, format!("user:{manager_id}"), &e);
                }
            }
        }
        Notification::DirectMessage {
            discord_user_id,
            content,
        } => {
            if let Err(e) = api.send_direct_message(&discord_user_id, &content).await {
                record_failure(dead_letters, kind, target, &e);
            }
        }
    }
}
