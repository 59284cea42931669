//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub discord_id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub player_id: Option<String>,
    pub is_manager: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

