//! Entity to DTO mappers

use std::collections::HashSet;

use roster_core::entities::{Game, Member, PlayerPreference};

use super::responses::{GameResponse, MemberResponse, PreferenceResponse};

// ============================================================================
// Game Mappers
// ============================================================================

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id.to_string(),
            date: game.date.clone(),
            time: game.time.clone(),
            opponent: game.opponent.clone(),
            league: game.league.clone(),
            division: game.division.clone(),
            game_mode: game.game_mode.clone(),
            team_size: game.team_size,
            notes: game.notes.clone(),
            available: game.available.clone(),
            unavailable: game.unavailable.clone(),
            roster: game.roster.clone(),
            subs: game.subs.clone(),
            withdrawals: game.withdrawals.clone(),
            reminded: game.reminded,
            created_at: game.created_at,
        }
    }
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self::from(&game)
    }
}

// ============================================================================
// Member Mappers
// ============================================================================

/// Member plus the set of player ids claimed by Discord accounts
pub struct MemberWithLink<'a> {
    pub member: &'a Member,
    pub linked_ids: &'a HashSet<String>,
}

impl From<MemberWithLink<'_>> for MemberResponse {
    fn from(data: MemberWithLink<'_>) -> Self {
        let m = data.member;
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            year: m.year,
            region: m.region.clone(),
            note: m.note.clone(),
            is_sub: m.is_sub,
            sort_order: m.sort_order,
            linked: data.linked_ids.contains(&m.id),
        }
    }
}

// ============================================================================
// Preference Mappers
// ============================================================================

impl From<&PlayerPreference> for PreferenceResponse {
    fn from(pref: &PlayerPreference) -> Self {
        Self {
            player_id: pref.player_id.clone(),
            preference: pref.preference.as_str().to_string(),
        }
    }
}
