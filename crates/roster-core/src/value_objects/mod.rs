//! Value objects - immutable types that represent domain concepts

mod game_column;
mod game_id;
mod preference;

pub use game_column::GameColumn;
pub use game_id::{GameId, GameIdParseError};
pub use preference::{PreferenceKind, PreferenceParseError};
