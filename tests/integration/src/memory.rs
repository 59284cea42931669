//! In-memory repository implementations
//!
//! Same contracts as the PostgreSQL repositories: per-column game updates
//! with a monotonic `reminded`, preference and setting upserts, and player
//! ids claimable by one user only. Game writes and settings reads can be
//! made to fail on demand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use roster_core::{
    DomainError, Game, GameId, GameRepository, GameUpdate, Member, MemberRepository,
    PlayerPreference, PreferenceRepository, RepoResult, SettingsRepository, StoreHealth, User,
    UserRepository,
};
use roster_service::ServiceContextBuilder;

/// Games written one column at a time, like the PostgreSQL store
#[derive(Debug, Default)]
pub struct MemoryGameRepository {
    games: DashMap<GameId, Game>,
    /// Column writes left before the next one fails
    fail_countdown: Mutex<Option<usize>>,
}

impl MemoryGameRepository {
    /// Fail the `n`th column write from now (1-based)
    ///
    /// Writes before it stay applied, as they would in a store without
    /// transactions. The failure fires once.
    pub fn fail_on_write(&self, n: usize) {
        *self.fail_countdown.lock() = Some(n.max(1));
    }

    fn next_write_fails(&self) -> bool {
        let mut countdown = self.fail_countdown.lock();
        match *countdown {
            Some(1) => {
                *countdown = None;
                true
            }
            Some(left) => {
                *countdown = Some(left - 1);
                false
            }
            None => false,
        }
    }
}

#[async_trait]
impl GameRepository for MemoryGameRepository {
    async fn find_by_id(&self, id: &GameId) -> RepoResult<Option<Game>> {
        Ok(self.games.get(id).map(|g| g.clone()))
    }

    async fn list(&self) -> RepoResult<Vec<Game>> {
        let mut games: Vec<Game> = self.games.iter().map(|g| g.clone()).collect();
        games.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
        Ok(games)
    }

    async fn find_pending_reminders(&self, date: &str) -> RepoResult<Vec<Game>> {
        let mut games: Vec<Game> = self
            .games
            .iter()
            .filter(|g| g.needs_reminder(date))
            .map(|g| g.clone())
            .collect();
        games.sort_by(|a, b| a.time.cmp(&b.time));
        Ok(games)
    }

    async fn create(&self, game: &Game) -> RepoResult<()> {
        if self.games.contains_key(&game.id) {
            return Err(DomainError::GameAlreadyExists(game.id.clone()));
        }
        self.games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    async fn update(&self, id: &GameId, update: &GameUpdate) -> RepoResult<Option<Game>> {
        let Some(current) = self.games.get(id).map(|g| g.clone()) else {
            return Ok(None);
        };

        for (column, value) in update.write_plan(&current) {
            if self.next_write_fails() {
                return Err(DomainError::DatabaseError(format!(
                    "write to games.{column} failed"
                )));
            }
            let Some(mut game) = self.games.get_mut(id) else {
                return Ok(None);
            };
            game.write_column(column, value)?;
        }

        self.find_by_id(id).await
    }

    async fn delete(&self, id: &GameId) -> RepoResult<bool> {
        Ok(self.games.remove(id).is_some())
    }
}

#[derive(Debug, Default)]
pub struct MemoryMemberRepository {
    members: RwLock<HashMap<String, Member>>,
}

impl MemoryMemberRepository {
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        Self {
            members: RwLock::new(members.into_iter().map(|m| (m.id.clone(), m)).collect()),
        }
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn list(&self) -> RepoResult<Vec<Member>> {
        let mut members: Vec<Member> = self.members.read().values().cloned().collect();
        members.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        Ok(members)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Member>> {
        Ok(self.members.read().get(id).cloned())
    }

    async fn upsert(&self, member: &Member) -> RepoResult<()> {
        self.members.write().insert(member.id.clone(), member.clone());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceRepository {
    preferences: DashMap<String, PlayerPreference>,
}

#[async_trait]
impl PreferenceRepository for MemoryPreferenceRepository {
    async fn list(&self) -> RepoResult<Vec<PlayerPreference>> {
        Ok(self.preferences.iter().map(|p| p.clone()).collect())
    }

    async fn upsert(&self, preference: &PlayerPreference) -> RepoResult<()> {
        self.preferences
            .insert(preference.player_id.clone(), preference.clone());
        Ok(())
    }
}

/// Users keyed by Discord id; one lock so linking checks and writes together
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_discord_id(&self, discord_id: &str) -> RepoResult<Option<User>> {
        Ok(self.users.read().get(discord_id).cloned())
    }

    async fn find_by_player_id(&self, player_id: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .read()
            .values()
            .find(|u| u.is_linked_to(player_id))
            .cloned())
    }

    async fn list_managers(&self) -> RepoResult<Vec<User>> {
        let mut managers: Vec<User> = self
            .users
            .read()
            .values()
            .filter(|u| u.is_manager)
            .cloned()
            .collect();
        managers.sort_by(|a, b| a.discord_id.cmp(&b.discord_id));
        Ok(managers)
    }

    async fn linked_player_ids(&self) -> RepoResult<Vec<String>> {
        Ok(self
            .users
            .read()
            .values()
            .filter_map(|u| u.player_id.clone())
            .collect())
    }

    async fn upsert(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.write();
        match users.get_mut(&user.discord_id) {
            Some(existing) => {
                existing.username.clone_from(&user.username);
                existing.display_name.clone_from(&user.display_name);
                existing.avatar.clone_from(&user.avatar);
                existing.is_manager = user.is_manager;
                existing.updated_at = Utc::now();
            }
            None => {
                let mut created = user.clone();
                created.player_id = None;
                users.insert(created.discord_id.clone(), created);
            }
        }
        Ok(())
    }

    async fn link_player(&self, discord_id: &str, player_id: &str) -> RepoResult<()> {
        let mut users = self.users.write();
        let taken = users
            .values()
            .any(|u| u.discord_id != discord_id && u.is_linked_to(player_id));
        if taken {
            return Err(DomainError::PlayerAlreadyLinked);
        }

        let user = users
            .get_mut(discord_id)
            .ok_or_else(|| DomainError::UserNotFound(discord_id.to_string()))?;
        user.player_id = Some(player_id.to_string());
        user.updated_at = Utc::now();
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemorySettingsRepository {
    settings: DashMap<String, String>,
    reads_fail: AtomicBool,
}

impl MemorySettingsRepository {
    /// Make every `get` return a database error until switched back
    pub fn set_reads_fail(&self, fail: bool) {
        self.reads_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        if self.reads_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(format!("read of setting {key} failed")));
        }
        Ok(self.settings.get(key).map(|v| v.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.settings.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store health that can be switched off to exercise readiness failures
#[derive(Debug)]
pub struct MemoryStoreHealth {
    healthy: AtomicBool,
}

impl Default for MemoryStoreHealth {
    fn default() -> Self {
        Self {
            healthy: AtomicBool::new(true),
        }
    }
}

impl MemoryStoreHealth {
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }
}

#[async_trait]
impl StoreHealth for MemoryStoreHealth {
    async fn ping(&self) -> RepoResult<()> {
        if self.healthy.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::DatabaseError("store unavailable".to_string()))
        }
    }
}

/// Every in-memory store, shared with the service context
#[derive(Debug, Clone, Default)]
pub struct MemoryStores {
    pub games: Arc<MemoryGameRepository>,
    pub members: Arc<MemoryMemberRepository>,
    pub preferences: Arc<MemoryPreferenceRepository>,
    pub users: Arc<MemoryUserRepository>,
    pub settings: Arc<MemorySettingsRepository>,
    pub health: Arc<MemoryStoreHealth>,
}

impl MemoryStores {
    /// Stores with the given member roster
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        Self {
            members: Arc::new(MemoryMemberRepository::with_members(members)),
            ..Self::default()
        }
    }

    /// Builder with every repository set; notifier and sessions still missing
    pub fn context_builder(&self) -> ServiceContextBuilder {
        ServiceContextBuilder::default()
            .game_repo(self.games.clone())
            .member_repo(self.members.clone())
            .preference_repo(self.preferences.clone())
            .user_repo(self.users.clone())
            .settings_repo(self.settings.clone())
            .store_health(self.health.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::NewGame;

    fn game() -> Game {
        Game::schedule(NewGame {
            date: "2025-03-14".to_string(),
            time: "20:00".to_string(),
            opponent: "Red Fox".to_string(),
            team_size: Some(2),
            ..NewGame::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_update_never_clears_reminded() {
        let repo = MemoryGameRepository::default();
        let game = game();
        repo.create(&game).await.unwrap();

        let reminded = GameUpdate {
            reminded: Some(true),
            ..GameUpdate::default()
        };
        repo.update(&game.id, &reminded).await.unwrap();

        let cleared = GameUpdate {
            reminded: Some(false),
            ..GameUpdate::default()
        };
        let stored = repo.update(&game.id, &cleared).await.unwrap().unwrap();
        assert!(stored.reminded);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_earlier_columns() {
        let repo = MemoryGameRepository::default();
        let game = game();
        repo.create(&game).await.unwrap();

        let update = GameUpdate {
            opponent: Some("Blue Owl".to_string()),
            notes: Some("bring snacks".to_string()),
            ..GameUpdate::default()
        };
        repo.fail_on_write(2);
        let err = repo.update(&game.id, &update).await.unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));

        let stored = repo.find_by_id(&game.id).await.unwrap().unwrap();
        assert_eq!(stored.opponent, "Blue Owl");
        assert_eq!(stored.notes, "");

        // The failure fires once
        let stored = repo.update(&game.id, &update).await.unwrap().unwrap();
        assert_eq!(stored.notes, "bring snacks");
    }

    #[tokio::test]
    async fn test_link_conflict() {
        let repo = MemoryUserRepository::default();
        repo.upsert(&User::new("111", "one", "One")).await.unwrap();
        repo.upsert(&User::new("222", "two", "Two")).await.unwrap();

        repo.link_player("111", "alock").await.unwrap();
        let err = repo.link_player("222", "alock").await.unwrap_err();
        assert!(matches!(err, DomainError::PlayerAlreadyLinked));

        // Re-linking the same account is fine
        repo.link_player("111", "alock").await.unwrap();
    }
}
