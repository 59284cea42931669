//! Webhook payloads and the game summary embed

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use roster_core::Game;
use serde::Serialize;

use super::{display_name, MemberNames};

const EMBED_COLOR: u32 = 0x00f0ff;
const FOOTER_TEXT: &str = "Game Over Pop1 War Team";
const WEBHOOK_USERNAME: &str = "Game Over Bot";

/// Body of an `execute webhook` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub username: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn new(name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// `2025-03-14` -> `Friday, Mar 14, 2025`; anything else is shown as-is
fn format_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_or_else(|_| date.to_string(), |d| d.format("%A, %b %d, %Y").to_string())
}

/// `20:30` -> `8:30 PM ET`; anything else is shown as-is
fn format_time(time: &str) -> String {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_or_else(|_| time.to_string(), |t| t.format("%-I:%M %p ET").to_string())
}

fn name_list(ids: &[String], names: &MemberNames) -> String {
    ids.iter()
        .map(|id| display_name(names, id))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the summary embed for `game`
pub fn game_embed(game: &Game, names: &MemberNames, timestamp: DateTime<Utc>) -> Embed {
    let mut fields = vec![
        EmbedField::new("⏰ Time", format_time(&game.time), true),
        EmbedField::new("⚔️ Opponent", game.opponent.clone(), true),
    ];

    let league: Vec<&str> = [&game.league, &game.division, &game.game_mode]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !league.is_empty() {
        fields.push(EmbedField::new("🏆 League", league.join(" · "), true));
    }

    let roster = if game.roster.is_empty() {
        "TBD".to_string()
    } else {
        name_list(&game.roster, names)
    };
    fields.push(EmbedField::new(
        format!("👥 Roster ({}/{})", game.roster.len(), game.team_size),
        roster,
        false,
    ));

    if !game.subs.is_empty() {
        fields.push(EmbedField::new("🔁 Subs", name_list(&game.subs, names), false));
    }

    if !game.notes.trim().is_empty() {
        fields.push(EmbedField::new("📝 Notes", game.notes.clone(), false));
    }

    Embed {
        title: format!("🎮 Game Day: {}", format_date(&game.date)),
        color: EMBED_COLOR,
        fields,
        footer: EmbedFooter {
            text: FOOTER_TEXT.to_string(),
        },
        timestamp: timestamp.to_rfc3339(),
    }
}

/// Summary post, optionally pinging linked roster players
pub fn summary_payload(game: &Game, names: &MemberNames, mentions: &[String]) -> WebhookPayload {
    let content = (!mentions.is_empty()).then(|| {
        mentions
            .iter()
            .map(|id| format!("<@{id}>"))
            .collect::<Vec<_>>()
            .join(" ")
    });

    WebhookPayload {
        content,
        username: WEBHOOK_USERNAME.to_string(),
        embeds: vec![game_embed(game, names, Utc::now())],
    }
}

/// Announcement sent right after a game is scheduled
pub fn new_game_payload(game: &Game, names: &MemberNames) -> WebhookPayload {
    WebhookPayload {
        content: Some(format!("📅 New game scheduled vs {}", game.opponent)),
        username: WEBHOOK_USERNAME.to_string(),
        embeds: vec![game_embed(game, names, Utc::now())],
    }
}
