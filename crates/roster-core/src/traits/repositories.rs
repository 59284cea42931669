//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method is a single keyed read or
//! write; no method spans a transaction.

use async_trait::async_trait;

use crate::entities::{Game, GameUpdate, Member, PlayerPreference, User};
use crate::error::DomainError;
use crate::value_objects::GameId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Game Repository
// ============================================================================

#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Find game by ID
    async fn find_by_id(&self, id: &GameId) -> RepoResult<Option<Game>>;

    /// List all games ordered by date, then time
    async fn list(&self) -> RepoResult<Vec<Game>>;

    /// Games on `date` that still owe a reminder (not reminded, roster not empty)
    async fn find_pending_reminders(&self, date: &str) -> RepoResult<Vec<Game>>;

    /// Insert a newly scheduled game
    async fn create(&self, game: &Game) -> RepoResult<()>;

    /// Write each set column of `update`, then return the stored game
    ///
    /// Columns are written independently, in [`GameUpdate::write_plan`]
    /// order against the stored row. Returns `None` when no game has this id.
    async fn update(&self, id: &GameId, update: &GameUpdate) -> RepoResult<Option<Game>>;

    /// Hard delete; returns whether a row was removed
    async fn delete(&self, id: &GameId) -> RepoResult<bool>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// List all members ordered by sort order, then name
    async fn list(&self) -> RepoResult<Vec<Member>>;

    /// Find member by ID
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Member>>;

    /// Insert or replace a member
    async fn upsert(&self, member: &Member) -> RepoResult<()>;
}

// ============================================================================
// Preference Repository
// ============================================================================

#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    /// List every recorded preference
    async fn list(&self) -> RepoResult<Vec<PlayerPreference>>;

    /// Insert or overwrite the preference for a player
    async fn upsert(&self, preference: &PlayerPreference) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by Discord ID
    async fn find_by_discord_id(&self, discord_id: &str) -> RepoResult<Option<User>>;

    /// Find the user that has claimed a player id
    async fn find_by_player_id(&self, player_id: &str) -> RepoResult<Option<User>>;

    /// All users flagged as managers
    async fn list_managers(&self) -> RepoResult<Vec<User>>;

    /// Player ids currently claimed by some user
    async fn linked_player_ids(&self) -> RepoResult<Vec<String>>;

    /// Create the user or refresh its profile fields and manager flag
    ///
    /// An existing player link is kept.
    async fn upsert(&self, user: &User) -> RepoResult<()>;

    /// Claim `player_id` for the user
    ///
    /// Fails with `PlayerAlreadyLinked` if another user holds it.
    async fn link_player(&self, discord_id: &str, player_id: &str) -> RepoResult<()>;
}

// ============================================================================
// Settings Repository
// ============================================================================

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read a setting value
    async fn get(&self, key: &str) -> RepoResult<Option<String>>;

    /// Insert or overwrite a setting value
    async fn set(&self, key: &str, value: &str) -> RepoResult<()>;
}

// ============================================================================
// Store health
// ============================================================================

#[async_trait]
pub trait StoreHealth: Send + Sync {
    /// Round-trip to the store
    async fn ping(&self) -> RepoResult<()>;
}
