//! Game entity <-> model mapper

use roster_core::entities::Game;
use roster_core::value_objects::GameId;

use crate::models::GameModel;

/// Convert GameModel to Game entity
impl From<GameModel> for Game {
    fn from(model: GameModel) -> Self {
        Game {
            id: GameId::new(model.id),
            date: model.date,
            time: model.time,
            opponent: model.opponent,
            league: model.league,
            division: model.division,
            game_mode: model.game_mode,
            team_size: model.team_size,
            notes: model.notes,
            available: model.available,
            unavailable: model.unavailable,
            roster: model.roster,
            subs: model.subs,
            withdrawals: model.withdrawals,
            reminded: model.reminded,
            created_at: model.created_at,
        }
    }
}

/// Borrowed values for inserting a newly scheduled game
pub struct GameInsert<'a> {
    pub id: &'a str,
    pub date: &'a str,
    pub time: &'a str,
    pub opponent: &'a str,
    pub league: &'a str,
    pub division: &'a str,
    pub game_mode: &'a str,
    pub team_size: i32,
    pub notes: &'a str,
}

impl<'a> GameInsert<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self {
            id: game.id.as_str(),
            date: &game.date,
            time: &game.time,
            opponent: &game.opponent,
            league: &game.league,
            division: &game.division,
            game_mode: &game.game_mode,
            team_size: game.team_size,
            notes: &game.notes,
        }
    }
}
