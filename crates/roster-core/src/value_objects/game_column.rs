//! Closed set of game columns that may be written after creation
//!
//! Partial updates name their target column through this enum only, so
//! the SQL text for a column write is always one of these static names.

/// A mutable column of the `games` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameColumn {
    Date,
    Time,
    Opponent,
    League,
    Division,
    GameMode,
    TeamSize,
    Notes,
    Available,
    Unavailable,
    Roster,
    Subs,
    Withdrawals,
    Reminded,
}

impl GameColumn {
    pub const ALL: [GameColumn; 14] = [
        Self::Date,
        Self::Time,
        Self::Opponent,
        Self::League,
        Self::Division,
        Self::GameMode,
        Self::TeamSize,
        Self::Notes,
        Self::Available,
        Self::Unavailable,
        Self::Roster,
        Self::Subs,
        Self::Withdrawals,
        Self::Reminded,
    ];

    /// Column name as stored
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
            Self::Opponent => "opponent",
            Self::League => "league",
            Self::Division => "division",
            Self::GameMode => "game_mode",
            Self::TeamSize => "team_size",
            Self::Notes => "notes",
            Self::Available => "available",
            Self::Unavailable => "unavailable",
            Self::Roster => "roster",
            Self::Subs => "subs",
            Self::Withdrawals => "withdrawals",
            Self::Reminded => "reminded",
        }
    }
}

impl std::fmt::Display for GameColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
