//! Game ID - opaque identifier assigned when a game is scheduled
//!
//! Format: `game_{unix_millis}_{suffix}` where the suffix is 9 characters
//! drawn from `[a-z0-9]`. IDs are compared as plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

const PREFIX: &str = "game_";
const SUFFIX_LEN: usize = 9;
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Identifier of a scheduled game
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Wrap an existing identifier without validation
    ///
    /// Stored rows and path parameters are trusted as-is; lookups of
    /// unknown ids simply miss.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh identifier from the current time and a random suffix
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        Self(format!("{PREFIX}{millis}_{}", random_suffix()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse and check the generated shape
    pub fn parse(s: &str) -> Result<Self, GameIdParseError> {
        let rest = s.strip_prefix(PREFIX).ok_or(GameIdParseError::InvalidFormat)?;
        let (millis, suffix) = rest.split_once('_').ok_or(GameIdParseError::InvalidFormat)?;

        let millis_ok = !millis.is_empty() && millis.bytes().all(|b| b.is_ascii_digit());
        let suffix_ok = suffix.len() == SUFFIX_LEN && suffix.bytes().all(|b| SUFFIX_CHARSET.contains(&b));

        if millis_ok && suffix_ok {
            Ok(Self(s.to_string()))
        } else {
            Err(GameIdParseError::InvalidFormat)
        }
    }
}

fn random_suffix() -> String {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

/// Error when a string does not have the generated game id shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameIdParseError {
    #[error("invalid game id format")]
    InvalidFormat,
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<GameId> for String {
    fn from(id: GameId) -> Self {
        id.0
    }
}

impl std::str::FromStr for GameId {
    type Err = GameIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameId::parse(s)
    }
}
