//! Session extractors
//!
//! Extract and validate the bearer session token from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use roster_common::SessionClaims;

use crate::response::ApiError;
use crate::state::AppState;

fn validate(state: &AppState, token: &str) -> Result<SessionClaims, ApiError> {
    state
        .session_service()
        .validate(token)
        .map_err(|e| {
            tracing::warn!(error = %e, "Invalid session token");
            ApiError::from(e)
        })
}

/// Signed-in user extracted from the session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: SessionClaims,
}

impl AuthUser {
    pub fn discord_id(&self) -> &str {
        self.claims.discord_id()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let claims = validate(&app_state, bearer.token())?;

        Ok(AuthUser { claims })
    }
}

/// Optional signed-in user
///
/// Returns None if no authorization header is present,
/// or an error if the token is invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl OptionalAuthUser {
    pub fn claims(&self) -> Option<&SessionClaims> {
        self.0.as_ref().map(|user| &user.claims)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_result =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await;

        match auth_result {
            Ok(TypedHeader(Authorization(bearer))) => {
                let app_state = AppState::from_ref(state);
                let claims = validate(&app_state, bearer.token())?;
                Ok(OptionalAuthUser(Some(AuthUser { claims })))
            }
            Err(_) => Ok(OptionalAuthUser(None)),
        }
    }
}

/// Signed-in user whose session carries the manager flag
#[derive(Debug, Clone)]
pub struct ManagerUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for ManagerUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.claims.is_manager {
            return Err(ApiError::ManagerRequired);
        }
        Ok(ManagerUser(user))
    }
}
