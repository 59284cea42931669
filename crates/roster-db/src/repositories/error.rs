//! Error handling utilities for repositories

use roster_core::error::DomainError;
use roster_core::value_objects::GameId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(discord_id: &str) -> DomainError {
    DomainError::UserNotFound(discord_id.to_string())
}

/// Create a "game already exists" error
pub fn game_exists(id: &GameId) -> DomainError {
    DomainError::GameAlreadyExists(id.clone())
}
