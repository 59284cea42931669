//! Shared-secret guard for the internal endpoints

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::response::ApiError;
use crate::state::AppState;

pub const INTERNAL_TOKEN_HEADER: &str = "x-internal-token";

/// Caller presenting the configured internal token
///
/// When no token is configured every call is rejected.
#[derive(Debug, Clone, Copy)]
pub struct InternalCaller;

/// Compare without stopping at the first differing byte
fn tokens_match(expected: &[u8], given: &[u8]) -> bool {
    if expected.len() != given.len() {
        return false;
    }
    expected
        .iter()
        .zip(given)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[async_trait]
impl<S> FromRequestParts<S> for InternalCaller
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let Some(expected) = app_state.config().internal.token.as_deref() else {
            tracing::warn!("Internal endpoint called but INTERNAL_API_TOKEN is not set");
            return Err(ApiError::InvalidInternalToken);
        };

        let given = parts
            .headers
            .get(INTERNAL_TOKEN_HEADER)
            .map(|v| v.as_bytes())
            .ok_or(ApiError::InvalidInternalToken)?;

        if tokens_match(expected.as_bytes(), given) {
            Ok(InternalCaller)
        } else {
            Err(ApiError::InvalidInternalToken)
        }
    }
}
