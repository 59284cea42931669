//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in roster-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod game;
mod health;
mod member;
mod preference;
mod settings;
mod user;

pub use game::PgGameRepository;
pub use health::PgStoreHealth;
pub use member::PgMemberRepository;
pub use preference::PgPreferenceRepository;
pub use settings::PgSettingsRepository;
pub use user::PgUserRepository;
