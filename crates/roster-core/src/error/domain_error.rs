//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::GameId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Game not found: {0}")]
    GameNotFound(GameId),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Member not found: {0}")]
    MemberNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Player ID required")]
    PlayerIdRequired,

    #[error("Invalid preference. Must be 'starter' or 'sub'")]
    InvalidPreference,

    #[error("Team size must be between {min} and {max}")]
    InvalidTeamSize { min: i32, max: i32 },

    #[error("Roster has {size} players but team size is {team_size}")]
    RosterTooLarge { size: usize, team_size: i32 },

    #[error("Player listed more than once: {0}")]
    DuplicatePlayer(String),

    #[error("Player is not on the roster")]
    NotOnRoster(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Manager access required")]
    ManagerRequired,

    #[error("{0}")]
    NotOwnPlayer(&'static str),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("This player is already linked to another account")]
    PlayerAlreadyLinked,

    #[error("Game already exists: {0}")]
    GameAlreadyExists(GameId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GameNotFound(_) => "UNKNOWN_GAME",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::PlayerIdRequired => "PLAYER_ID_REQUIRED",
            Self::InvalidPreference => "INVALID_PREFERENCE",
            Self::InvalidTeamSize { .. } => "INVALID_TEAM_SIZE",
            Self::RosterTooLarge { .. } => "ROSTER_TOO_LARGE",
            Self::DuplicatePlayer(_) => "DUPLICATE_PLAYER",
            Self::NotOnRoster(_) => "NOT_ON_ROSTER",

            // Authorization
            Self::ManagerRequired => "MANAGER_REQUIRED",
            Self::NotOwnPlayer(_) => "NOT_OWN_PLAYER",

            // Conflict
            Self::PlayerAlreadyLinked => "PLAYER_ALREADY_LINKED",
            Self::GameAlreadyExists(_) => "GAME_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::GameNotFound(_) | Self::UserNotFound(_) | Self::MemberNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::MissingRequiredFields
                | Self::PlayerIdRequired
                | Self::InvalidPreference
                | Self::InvalidTeamSize { .. }
                | Self::RosterTooLarge { .. }
                | Self::DuplicatePlayer(_)
                | Self::NotOnRoster(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::ManagerRequired | Self::NotOwnPlayer(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::PlayerAlreadyLinked | Self::GameAlreadyExists(_))
    }
}
