//! Bearer session tokens
//!
//! A token is an HS256 JWT whose claims carry everything the API needs to
//! authorize a request without a store lookup: the Discord id, the linked
//! player id (if any) and the manager flag. Tokens are minted after the
//! Discord sign-in completes and re-minted when the user links a player.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Identity a session is minted for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub discord_id: String,
    pub username: String,
    pub player_id: Option<String>,
    pub is_manager: bool,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (Discord user ID)
    pub sub: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    #[serde(default)]
    pub is_manager: bool,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    #[must_use]
    pub fn discord_id(&self) -> &str {
        &self.sub
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Whether this session may act on behalf of `player_id`
    ///
    /// Sessions without a linked player are not restricted.
    #[must_use]
    pub fn may_act_for(&self, player_id: &str) -> bool {
        self.player_id.as_deref().map_or(true, |own| own == player_id)
    }
}

/// Issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// Encodes and validates session tokens
#[derive(Clone)]
pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl SessionService {
    #[must_use]
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Mint a token for `identity`
    pub fn issue(&self, identity: &SessionIdentity) -> Result<SessionToken, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: identity.discord_id.clone(),
            username: identity.username.clone(),
            player_id: identity.player_id.clone(),
            is_manager: identity.is_manager,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_seconds)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode session token")))?;

        Ok(SessionToken {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.ttl_seconds,
        })
    }

    /// Decode and validate a token
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AppError> {
        decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}
