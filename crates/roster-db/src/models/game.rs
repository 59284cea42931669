//! Game database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for games table
#[derive(Debug, Clone, FromRow)]
pub struct GameModel {
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
