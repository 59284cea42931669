//! Message rendering

mod embed;
mod text;

pub use embed::{
    game_embed, new_game_payload, summary_payload, Embed, EmbedField, EmbedFooter, WebhookPayload,
};
pub use text::{reminder_text, withdrawal_text};

use std::collections::HashMap;

/// Player id to display name, captured when a notification is built
pub type MemberNames = HashMap<String, String>;

pub(crate) fn display_name<'a>(names: &'a MemberNames, player_id: &'a str) -> &'a str {
    names.get(player_id).map_or(player_id, String::as_str)
}
