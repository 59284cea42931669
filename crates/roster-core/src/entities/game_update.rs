//! Typed partial update for a game
//!
//! Every mutable column has its own optional slot. [`GameUpdate::changes`]
//! lists the set slots paired with their [`GameColumn`]. A store that
//! issues one write per column follows [`GameUpdate::write_plan`] instead,
//! so that a failure between two writes never leaves a player in both
//! availability lists or a roster larger than the team size.

use super::Game;
use crate::error::DomainError;
use crate::value_objects::GameColumn;

/// Partial set of column replacements
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameUpdate {
    pub date: Option<String>,
    pub time: Option<String>,
    pub opponent: Option<String>,
    pub league: Option<String>,
    pub division: Option<String>,
    pub game_mode: Option<String>,
    pub team_size: Option<i32>,
    pub notes: Option<String>,
    pub available: Option<Vec<String>>,
    pub unavailable: Option<Vec<String>>,
    pub roster: Option<Vec<String>>,
    pub subs: Option<Vec<String>>,
    pub withdrawals: Option<Vec<String>>,
    pub reminded: Option<bool>,
}

/// Borrowed value destined for a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnValue<'a> {
    Text(&'a str),
    Int(i32),
    List(&'a [String]),
    Flag(bool),
}

impl GameUpdate {
    pub fn is_empty(&self) -> bool {
        self.changes().is_empty()
    }

    /// Set columns in a stable order
    pub fn changes(&self) -> Vec<(GameColumn, ColumnValue<'_>)> {
        [
            text(GameColumn::Date, self.date.as_deref()),
            text(GameColumn::Time, self.time.as_deref()),
            text(GameColumn::Opponent, self.opponent.as_deref()),
            text(GameColumn::League, self.league.as_deref()),
            text(GameColumn::Division, self.division.as_deref()),
            text(GameColumn::GameMode, self.game_mode.as_deref()),
            self.team_size.map(|v| (GameColumn::TeamSize, ColumnValue::Int(v))),
            text(GameColumn::Notes, self.notes.as_deref()),
            list(GameColumn::Available, self.available.as_deref()),
            list(GameColumn::Unavailable, self.unavailable.as_deref()),
            list(GameColumn::Roster, self.roster.as_deref()),
            list(GameColumn::Subs, self.subs.as_deref()),
            list(GameColumn::Withdrawals, self.withdrawals.as_deref()),
            self.reminded.map(|v| (GameColumn::Reminded, ColumnValue::Flag(v))),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Set columns ordered for one-at-a-time writes over `current`
    ///
    /// Applying any prefix of the plan to `current` keeps the availability
    /// lists disjoint and the roster within the team size:
    ///
    /// - the list a player leaves is written before the list they join
    /// - a shrinking team size follows the roster, a growing one leads it
    /// - withdrawals are cleared before the roster and grown after it
    pub fn write_plan(&self, current: &Game) -> Vec<(GameColumn, ColumnValue<'_>)> {
        let mut plan = self.changes();
        plan.sort_by_key(|(column, _)| self.write_rank(*column, current));
        plan
    }

    fn write_rank(&self, column: GameColumn, current: &Game) -> u8 {
        let available_first = self
            .available
            .as_deref()
            .is_none_or(|available| is_disjoint(available, &current.unavailable));

        match column {
            GameColumn::Date
            | GameColumn::Time
            | GameColumn::Opponent
            | GameColumn::League
            | GameColumn::Division
            | GameColumn::GameMode
            | GameColumn::Notes => 0,
            GameColumn::TeamSize => {
                let fits = self
                    .team_size
                    .is_none_or(|size| current.roster.len() <= usize::try_from(size).unwrap_or(0));
                if fits {
                    1
                } else {
                    3
                }
            }
            GameColumn::Withdrawals => {
                let shrinks = self
                    .withdrawals
                    .as_deref()
                    .is_some_and(|withdrawals| is_subset(withdrawals, &current.withdrawals));
                if shrinks {
                    1
                } else {
                    4
                }
            }
            GameColumn::Roster => 2,
            GameColumn::Subs => 4,
            GameColumn::Available if available_first => 5,
            GameColumn::Available => 6,
            GameColumn::Unavailable if available_first => 6,
            GameColumn::Unavailable => 5,
            GameColumn::Reminded => 7,
        }
    }

    /// Copy every set slot onto `game`
    pub fn apply_to(&self, game: &mut Game) {
        fn set<T: Clone>(target: &mut T, value: Option<&T>) {
            if let Some(value) = value {
                target.clone_from(value);
            }
        }

        set(&mut game.date, self.date.as_ref());
        set(&mut game.time, self.time.as_ref());
        set(&mut game.opponent, self.opponent.as_ref());
        set(&mut game.league, self.league.as_ref());
        set(&mut game.division, self.division.as_ref());
        set(&mut game.game_mode, self.game_mode.as_ref());
        set(&mut game.team_size, self.team_size.as_ref());
        set(&mut game.notes, self.notes.as_ref());
        set(&mut game.available, self.available.as_ref());
        set(&mut game.unavailable, self.unavailable.as_ref());
        set(&mut game.roster, self.roster.as_ref());
        set(&mut game.subs, self.subs.as_ref());
        set(&mut game.withdrawals, self.withdrawals.as_ref());
        set(&mut game.reminded, self.reminded.as_ref());
    }
}

impl Game {
    /// Write one column the way a store does
    ///
    /// `reminded` is OR-ed in, never cleared.
    pub fn write_column(
        &mut self,
        column: GameColumn,
        value: ColumnValue<'_>,
    ) -> Result<(), DomainError> {
        match (column, value) {
            (GameColumn::Date, ColumnValue::Text(v)) => v.clone_into(&mut self.date),
            (GameColumn::Time, ColumnValue::Text(v)) => v.clone_into(&mut self.time),
            (GameColumn::Opponent, ColumnValue::Text(v)) => v.clone_into(&mut self.opponent),
            (GameColumn::League, ColumnValue::Text(v)) => v.clone_into(&mut self.league),
            (GameColumn::Division, ColumnValue::Text(v)) => v.clone_into(&mut self.division),
            (GameColumn::GameMode, ColumnValue::Text(v)) => v.clone_into(&mut self.game_mode),
            (GameColumn::Notes, ColumnValue::Text(v)) => v.clone_into(&mut self.notes),
            (GameColumn::TeamSize, ColumnValue::Int(v)) => self.team_size = v,
            (GameColumn::Available, ColumnValue::List(v)) => v.clone_into(&mut self.available),
            (GameColumn::Unavailable, ColumnValue::List(v)) => {
                v.clone_into(&mut self.unavailable);
            }
            (GameColumn::Roster, ColumnValue::List(v)) => v.clone_into(&mut self.roster),
            (GameColumn::Subs, ColumnValue::List(v)) => v.clone_into(&mut self.subs),
            (GameColumn::Withdrawals, ColumnValue::List(v)) => {
                v.clone_into(&mut self.withdrawals);
            }
            (GameColumn::Reminded, ColumnValue::Flag(v)) => self.reminded |= v,
            (column, value) => {
                return Err(DomainError::InternalError(format!(
                    "column {column} cannot hold {value:?}"
                )));
            }
        }
        Ok(())
    }
}

fn is_disjoint(left: &[String], right: &[String]) -> bool {
    !left.iter().any(|p| right.contains(p))
}

fn is_subset(inner: &[String], outer: &[String]) -> bool {
    inner.iter().all(|p| outer.contains(p))
}

fn text(column: GameColumn, value: Option<&str>) -> Option<(GameColumn, ColumnValue<'_>)> {
    value.map(|v| (column, ColumnValue::Text(v)))
}

fn list(column: GameColumn, value: Option<&[String]>) -> Option<(GameColumn, ColumnValue<'_>)> {
    value.map(|v| (column, ColumnValue::List(v)))
}
