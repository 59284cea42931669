//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use roster_core::GameId;

use crate::response::ApiError;

/// Game id from the `:id` segment
///
/// Ids are not shape-checked; unknown ids resolve to 404 in the service.
#[derive(Debug, Clone)]
pub struct GameIdPath(pub GameId);

#[async_trait]
impl<S> FromRequestParts<S> for GameIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        Ok(GameIdPath(GameId::new(id)))
    }
}

/// Player (member) id from the `:player_id` / `:id` segment
#[derive(Debug, Clone)]
pub struct PlayerIdPath(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for PlayerIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        if id.trim().is_empty() {
            return Err(ApiError::invalid_path("Player ID required"));
        }
        Ok(PlayerIdPath(id))
    }
}
