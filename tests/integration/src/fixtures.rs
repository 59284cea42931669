//! Test fixtures and data generators
//!
//! Provides reusable test data and typed views of API responses.

use std::collections::BTreeMap;

use chrono::{FixedOffset, Utc};
use roster_core::Member;
use serde::{Deserialize, Serialize};

/// A small roster; `shark` is a sub
pub fn seed_members() -> Vec<Member> {
    let mut members = vec![
        member("alock", "GO-Alock4", 2021, 1),
        member("cronides", "GO-Cronides", 2021, 2),
        member("ghostxrp", "GO_GhostXRP", 2021, 3),
        member("babs", "GO_BABs", 2023, 6),
    ];
    let mut shark = member("shark", "Shark", 2021, 1);
    shark.is_sub = true;
    members.push(shark);
    members
}

fn member(id: &str, name: &str, year: i32, sort_order: i32) -> Member {
    let mut member = Member::new(id, name, year);
    member.sort_order = sort_order;
    member
}

/// Tomorrow's date as the reminder job sees it (tests run the server at UTC)
pub fn tomorrow() -> String {
    let utc = FixedOffset::east_opt(0).expect("zero offset is valid");
    roster_service::tomorrow(Utc::now(), utc)
}

/// Create game request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub date: String,
    pub time: String,
    pub opponent: String,
    pub league: String,
    pub division: String,
    pub game_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<i32>,
    pub notes: String,
}

impl CreateGameRequest {
    pub fn vs(opponent: &str) -> Self {
        Self {
            date: "2025-03-14".to_string(),
            time: "20:00".to_string(),
            opponent: opponent.to_string(),
            league: "Pop1 League".to_string(),
            division: "Gold".to_string(),
            game_mode: "Control".to_string(),
            team_size: None,
            notes: String::new(),
        }
    }

    pub fn with_team_size(mut self, team_size: i32) -> Self {
        self.team_size = Some(team_size);
        self
    }

    pub fn on(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }
}

/// Game response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: String,
    pub date: String,
    pub time: String,
    pub opponent: String,
    pub league: String,
    pub division: String,
    pub game_mode: String,
    pub team_size: i32,
    pub notes: String,
    pub available: Vec<String>,
    pub unavailable: Vec<String>,
    pub roster: Vec<String>,
    pub subs: Vec<String>,
    pub withdrawals: Vec<String>,
    pub reminded: bool,
}

/// Games plus preferences snapshot
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    pub games: Vec<GameResponse>,
    pub player_preferences: BTreeMap<String, String>,
}

/// Member response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub region: Option<String>,
    pub is_sub: bool,
    pub sort_order: i32,
    pub linked: bool,
}

#[derive(Debug, Deserialize)]
pub struct MembersResponse {
    pub active: Vec<MemberResponse>,
    pub subs: Vec<MemberResponse>,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub success: bool,
    pub player_id: String,
    pub session: SessionResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub authenticated: bool,
    pub discord_id: Option<String>,
    pub player_id: Option<String>,
    #[serde(default)]
    pub is_manager: bool,
}

#[derive(Debug, Deserialize)]
pub struct WebhookStatusResponse {
    pub configured: bool,
    pub preview: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRunResponse {
    pub games_reminded: usize,
    pub messages_queued: usize,
    pub players_without_discord: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadLetterResponse {
    pub kind: String,
    pub target: String,
    pub code: String,
}
