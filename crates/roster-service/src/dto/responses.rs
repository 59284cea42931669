//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Keys are
//! camelCase and list fields are always present (possibly empty).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use roster_common::SessionToken;
use serde::Serialize;

// ============================================================================
// Game Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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
    pub created_at: DateTime<Utc>,
}

/// Everything the schedule page needs in one call
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    pub games: Vec<GameResponse>,
    pub player_preferences: BTreeMap<String, String>,
}

/// Acknowledgement for work handed to the notification queue
#[derive(Debug, Clone, Serialize)]
pub struct QueuedResponse {
    pub queued: bool,
}

impl QueuedResponse {
    pub fn queued() -> Self {
        Self { queued: true }
    }
}

// ============================================================================
// Member / Preference Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub is_sub: bool,
    pub sort_order: i32,
    /// A Discord account has claimed this player id
    pub linked: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MembersResponse {
    pub active: Vec<MemberResponse>,
    pub subs: Vec<MemberResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceResponse {
    pub player_id: String,
    pub preference: String,
}

// ============================================================================
// Account Responses
// ============================================================================

/// Current session, or `{"authenticated": false}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    pub is_manager: bool,
}

impl MeResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            discord_id: None,
            username: None,
            display_name: None,
            avatar: None,
            player_id: None,
            is_manager: false,
        }
    }
}

/// Issued bearer session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl From<SessionToken> for SessionResponse {
    fn from(token: SessionToken) -> Self {
        Self {
            token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}

/// Result of a sign-in
#[derive(Debug, Clone, Serialize)]
pub struct SignInResponse {
    pub session: SessionResponse,
    pub user: MeResponse,
}

/// Result of linking a player; carries a session with the new player id
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub success: bool,
    pub player_id: String,
    pub session: SessionResponse,
}

// ============================================================================
// Settings / Internal Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookStatusResponse {
    pub configured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordIdResponse {
    pub discord_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Outcome of a reminder sweep
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRunResponse {
    pub games_reminded: usize,
    pub messages_queued: usize,
    /// Roster players with no linked Discord account
    pub players_without_discord: Vec<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
