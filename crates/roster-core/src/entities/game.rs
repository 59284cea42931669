//! Game entity - one scheduled match and its roster state
//!
//! All roster reconciliation happens here as plain methods on [`Game`].
//! Each method validates first and only then mutates, returning the
//! [`GameUpdate`] that describes exactly which columns changed. A rejected
//! call leaves the game untouched.
//!
//! Invariants kept by these methods:
//! - a player is never in both `available` and `unavailable`
//! - `roster.len() <= team_size`
//! - `withdrawals` only grows through [`Game::withdraw`] and is cleared when a
//!   roster assignment fills the team
//! - `reminded` only moves from false to true

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::GameUpdate;
use crate::error::DomainError;
use crate::value_objects::GameId;

pub const DEFAULT_TEAM_SIZE: i32 = 10;
pub const MIN_TEAM_SIZE: i32 = 1;
pub const MAX_TEAM_SIZE: i32 = 50;

/// Scheduled match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: GameId,
    pub date: String,
    pub time: String,
    pub opponent: String,
    pub league: String,
    pub division: String,
    pub game_mode: String,
    pub team_size: i32,
    pub notes: String,
    pub available: Vec<String>,
    pub unavailable: Vec<String>,
    pub roster: Vec<String>,
    pub subs: Vec<String>,
    pub withdrawals: Vec<String>,
    pub reminded: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by a manager when scheduling a game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGame {
    pub date: String,
    pub time: String,
    pub opponent: String,
    pub league: String,
    pub division: String,
    pub game_mode: String,
    pub team_size: Option<i32>,
    pub notes: String,
}

impl Game {
    /// Schedule a new game with a fresh id and empty player lists
    pub fn schedule(new: NewGame) -> Result<Self, DomainError> {
        if is_blank(&new.date) || is_blank(&new.time) || is_blank(&new.opponent) {
            return Err(DomainError::MissingRequiredFields);
        }
        let team_size = new.team_size.unwrap_or(DEFAULT_TEAM_SIZE);
        check_team_size(team_size)?;

        Ok(Self {
            id: GameId::generate(),
            date: new.date,
            time: new.time,
            opponent: new.opponent,
            league: new.league,
            division: new.division,
            game_mode: new.game_mode,
            team_size,
            notes: new.notes,
            available: Vec::new(),
            unavailable: Vec::new(),
            roster: Vec::new(),
            subs: Vec::new(),
            withdrawals: Vec::new(),
            reminded: false,
            created_at: Utc::now(),
        })
    }

    /// Number of roster slots
    #[inline]
    pub fn capacity(&self) -> usize {
        usize::try_from(self.team_size).unwrap_or(0)
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.roster.len() >= self.capacity()
    }

    #[inline]
    pub fn is_on_roster(&self, player_id: &str) -> bool {
        self.roster.iter().any(|p| p == player_id)
    }

    /// Record a player's availability, moving them out of the opposite list
    pub fn set_availability(
        &mut self,
        player_id: &str,
        is_available: bool,
    ) -> Result<GameUpdate, DomainError> {
        if is_blank(player_id) {
            return Err(DomainError::PlayerIdRequired);
        }

        self.available.retain(|p| p != player_id);
        self.unavailable.retain(|p| p != player_id);
        if is_available {
            self.available.push(player_id.to_string());
        } else {
            self.unavailable.push(player_id.to_string());
        }

        Ok(GameUpdate {
            available: Some(self.available.clone()),
            unavailable: Some(self.unavailable.clone()),
            ..GameUpdate::default()
        })
    }

    /// Replace the roster (and optionally the subs list)
    ///
    /// A roster that fills every slot clears the withdrawals list.
    pub fn assign_roster(
        &mut self,
        roster: Vec<String>,
        subs: Option<Vec<String>>,
    ) -> Result<GameUpdate, DomainError> {
        check_roster(&roster, self.team_size)?;
        if let Some(subs) = &subs {
            check_players(subs)?;
        }

        self.roster = roster;
        let mut update = GameUpdate {
            roster: Some(self.roster.clone()),
            ..GameUpdate::default()
        };

        if let Some(subs) = subs {
            self.subs = subs;
            update.subs = Some(self.subs.clone());
        }

        if self.is_full() {
            self.withdrawals.clear();
            update.withdrawals = Some(Vec::new());
        }

        Ok(update)
    }

    /// Pull a rostered player out of the game
    pub fn withdraw(&mut self, player_id: &str) -> Result<GameUpdate, DomainError> {
        if is_blank(player_id) {
            return Err(DomainError::PlayerIdRequired);
        }
        if !self.is_on_roster(player_id) {
            return Err(DomainError::NotOnRoster(player_id.to_string()));
        }

        self.roster.retain(|p| p != player_id);
        push_unique(&mut self.withdrawals, player_id);
        push_unique(&mut self.unavailable, player_id);
        self.available.retain(|p| p != player_id);

        Ok(GameUpdate {
            roster: Some(self.roster.clone()),
            withdrawals: Some(self.withdrawals.clone()),
            available: Some(self.available.clone()),
            unavailable: Some(self.unavailable.clone()),
            ..GameUpdate::default()
        })
    }

    /// Apply a manager's partial edit
    ///
    /// Returns the normalized update that was applied. Availability and
    /// withdrawal lists are owned by the reconciliation methods and are not
    /// accepted here; a request to clear `reminded` is dropped.
    pub fn apply_edit(&mut self, mut update: GameUpdate) -> Result<GameUpdate, DomainError> {
        update.available = None;
        update.unavailable = None;
        update.withdrawals = None;
        if update.reminded == Some(false) || self.reminded {
            update.reminded = None;
        }

        for value in [&update.date, &update.time, &update.opponent].into_iter().flatten() {
            if is_blank(value) {
                return Err(DomainError::MissingRequiredFields);
            }
        }

        let team_size = update.team_size.unwrap_or(self.team_size);
        check_team_size(team_size)?;
        check_roster(update.roster.as_ref().unwrap_or(&self.roster), team_size)?;
        if let Some(subs) = &update.subs {
            check_players(subs)?;
        }

        let roster_changed = update.roster.is_some();
        update.apply_to(self);

        if roster_changed && self.is_full() && !self.withdrawals.is_empty() {
            self.withdrawals.clear();
            update.withdrawals = Some(Vec::new());
        }

        Ok(update)
    }

    /// Flag the game as reminded; `None` when it already was
    pub fn mark_reminded(&mut self) -> Option<GameUpdate> {
        if self.reminded {
            return None;
        }
        self.reminded = true;
        Some(GameUpdate {
            reminded: Some(true),
            ..GameUpdate::default()
        })
    }

    /// Whether a reminder is still owed for a game on `date`
    pub fn needs_reminder(&self, date: &str) -> bool {
        self.date == date && !self.reminded && !self.roster.is_empty()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn push_unique(list: &mut Vec<String>, player_id: &str) {
    if !list.iter().any(|p| p == player_id) {
        list.push(player_id.to_string());
    }
}

fn check_team_size(team_size: i32) -> Result<(), DomainError> {
    if (MIN_TEAM_SIZE..=MAX_TEAM_SIZE).contains(&team_size) {
        Ok(())
    } else {
        Err(DomainError::InvalidTeamSize {
            min: MIN_TEAM_SIZE,
            max: MAX_TEAM_SIZE,
        })
    }
}

fn check_roster(roster: &[String], team_size: i32) -> Result<(), DomainError> {
    let capacity = usize::try_from(team_size).unwrap_or(0);
    if roster.len() > capacity {
        return Err(DomainError::RosterTooLarge {
            size: roster.len(),
            team_size,
        });
    }
    check_players(roster)
}

fn check_players(players: &[String]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(players.len());
    for player in players {
        if is_blank(player) {
            return Err(DomainError::PlayerIdRequired);
        }
        if !seen.insert(player.as_str()) {
            return Err(DomainError::DuplicatePlayer(player.clone()));
        }
    }
    Ok(())
}
