//! # roster-core
//!
//! Domain layer containing entities, value objects, roster reconciliation
//! rules, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    ColumnValue, Game, GameUpdate, Member, NewGame, PlayerPreference, User, DEFAULT_TEAM_SIZE,
    MAX_TEAM_SIZE, MIN_TEAM_SIZE,
};
pub use error::DomainError;
pub use traits::{
    GameRepository, MemberRepository, PreferenceRepository, RepoResult, SettingsRepository,
    StoreHealth, UserRepository,
};
pub use value_objects::{GameColumn, GameId, GameIdParseError, PreferenceKind, PreferenceParseError};
