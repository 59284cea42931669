//! Queued notification jobs
//!
//! Every variant owns a snapshot of what it needs so that a job can run
//! after the request that produced it has finished.

use roster_core::Game;

use crate::messages::MemberNames;

#[derive(Debug, Clone)]
pub enum Notification {
    /// Webhook summary post, optionally mentioning linked roster players
    GameSummary {
        webhook_url: String,
        game: Game,
        names: MemberNames,
        mentions: Vec<String>,
    },
    /// Webhook announcement of a freshly scheduled game
    NewGame {
        webhook_url: String,
        game: Game,
        names: MemberNames,
    },
    /// Bot DM to every manager that a roster player withdrew
    WithdrawalAlert {
        game: Game,
        player_name: String,
        manager_ids: Vec<String>,
    },
    /// Single bot DM
    DirectMessage {
        discord_user_id: String,
        content: String,
    },
}

impl Notification {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GameSummary { .. } => "game_summary",
            Self::NewGame { .. } => "new_game",
            Self::WithdrawalAlert { .. } => "withdrawal_alert",
            Self::DirectMessage { .. } => "direct_message",
        }
    }

    /// Recipient description for logs and dead letters
    ///
    /// Webhook URLs carry their secret in the path, so only the game is named.
    #[must_use]
    pub fn target(&self) -> String {
        match self {
            Self::GameSummary { game, .. } | Self::NewGame { game, .. } => {
                format!("webhook:{}", game.id)
            }
            Self::WithdrawalAlert { manager_ids, .. } => {
                format!("managers:{}", manager_ids.join(","))
            }
            Self::DirectMessage {
                discord_user_id, ..
            } => format!("user:{discord_user_id}"),
        }
    }
}
