//! Player preference database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for player_preferences table
#[derive(Debug, Clone, FromRow)]
pub struct PreferenceModel {
    pub player_id: String,
    /// `starter` or `sub`, guarded by a CHECK constraint
    pub preference: String,
    pub updated_at: DateTime<Utc>,
}
