//! Starter/sub intent a player declares for upcoming games

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a player would rather start or sit on the bench
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceKind {
    Starter,
    Sub,
}

impl PreferenceKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Sub => "sub",
        }
    }

    pub fn parse(s: &str) -> Result<Self, PreferenceParseError> {
        match s {
            "starter" => Ok(Self::Starter),
            "sub" => Ok(Self::Sub),
            _ => Err(PreferenceParseError::Unknown(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceParseError {
    #[error("unknown preference: {0}")]
    Unknown(String),
}

impl fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PreferenceKind {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
