//! Player preference entity

use chrono::{DateTime, Utc};

use crate::value_objects::PreferenceKind;

/// Latest starter/sub intent recorded for a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPreference {
    pub player_id: String,
    pub preference: PreferenceKind,
    pub updated_at: DateTime<Utc>,
}

impl PlayerPreference {
    pub fn new(player_id: impl Into<String>, preference: PreferenceKind) -> Self {
        Self {
            player_id: player_id.into(),
            preference,
            updated_at: Utc::now(),
        }
    }
}
