//! Domain entities - core business objects

mod game;
mod game_update;
mod member;
mod preference;
mod user;

pub use game::{Game, NewGame, DEFAULT_TEAM_SIZE, MAX_TEAM_SIZE, MIN_TEAM_SIZE};
pub use game_update::{ColumnValue, GameUpdate};
pub use member::Member;
pub use preference::PlayerPreference;
pub use user::User;
