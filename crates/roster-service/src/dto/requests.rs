//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate`. Text fields that
//! a missing key should report as a domain error (e.g. "Missing required
//! fields") default to empty instead of failing deserialization.

use roster_core::{GameUpdate, NewGame};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Game Requests
// ============================================================================

/// Schedule a new game
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGameRequest {
    pub date: String,
    pub time: String,

    #[validate(length(max = 100, message = "Opponent must be at most 100 characters"))]
    pub opponent: String,

    pub league: Option<String>,
    pub division: Option<String>,
    pub game_mode: Option<String>,

    #[validate(range(min = 1, max = 50, message = "Team size must be between 1 and 50"))]
    pub team_size: Option<i32>,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,
}

impl From<CreateGameRequest> for NewGame {
    fn from(req: CreateGameRequest) -> Self {
        Self {
            date: req.date,
            time: req.time,
            opponent: req.opponent,
            league: req.league.unwrap_or_default(),
            division: req.division.unwrap_or_default(),
            game_mode: req.game_mode.unwrap_or_default(),
            team_size: req.team_size,
            notes: req.notes.unwrap_or_default(),
        }
    }
}

/// Partial game edit; only the keys present in the body are written
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    pub date: Option<String>,
    pub time: Option<String>,

    #[validate(length(max = 100, message = "Opponent must be at most 100 characters"))]
    pub opponent: Option<String>,

    pub league: Option<String>,
    pub division: Option<String>,
    pub game_mode: Option<String>,

    #[validate(range(min = 1, max = 50, message = "Team size must be between 1 and 50"))]
    pub team_size: Option<i32>,

    #[validate(length(max = 2000, message = "Notes must be at most 2000 characters"))]
    pub notes: Option<String>,

    pub roster: Option<Vec<String>>,
    pub subs: Option<Vec<String>>,
    pub reminded: Option<bool>,
}

impl From<UpdateGameRequest> for GameUpdate {
    fn from(req: UpdateGameRequest) -> Self {
        Self {
            date: req.date,
            time: req.time,
            opponent: req.opponent,
            league: req.league,
            division: req.division,
            game_mode: req.game_mode,
            team_size: req.team_size,
            notes: req.notes,
            roster: req.roster,
            subs: req.subs,
            reminded: req.reminded,
            ..Self::default()
        }
    }
}

/// Manager roster assignment
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AssignRosterRequest {
    #[serde(default)]
    #[validate(length(max = 50, message = "Roster can hold at most 50 players"))]
    pub roster: Vec<String>,

    /// Replaces the subs list only when present
    pub subs: Option<Vec<String>>,
}

/// Player availability toggle
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityRequest {
    pub player_id: String,
    pub is_available: bool,
}

/// Player withdrawal from a roster
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct WithdrawRequest {
    pub player_id: String,
}

// ============================================================================
// Member / Preference Requests
// ============================================================================

/// Create or replace a member record
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertMemberRequest {
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    pub name: String,

    #[validate(range(min = 2000, max = 2100, message = "Year must be between 2000 and 2100"))]
    pub year: i32,

    pub region: Option<String>,
    pub note: Option<String>,

    #[serde(default)]
    pub is_sub: bool,

    #[serde(default)]
    pub sort_order: i32,
}

/// Starter/sub preference; the value is checked by the service
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SetPreferenceRequest {
    pub preference: String,
}

// ============================================================================
// Account / Settings Requests
// ============================================================================

/// Claim a player id for the signed-in Discord account
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkPlayerRequest {
    pub player_id: String,
}

/// Replace the webhook URL; an empty string clears it
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SetWebhookRequest {
    #[validate(length(max = 512, message = "Webhook URL must be at most 512 characters"))]
    pub webhook: String,
}

/// Options for the summary post
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PostSummaryRequest {
    /// Ping linked roster players in the message content
    pub mention_players: bool,
}
