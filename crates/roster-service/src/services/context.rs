//! Service context - dependency container for services
//!
//! Holds the store handles, the notification dispatcher, and the session
//! service. Every handle is injected, so the same services run against
//! PostgreSQL in production and in-memory stores in tests.

use std::sync::Arc;

use chrono::FixedOffset;
use roster_common::SessionService;
use roster_core::traits::{
    GameRepository, MemberRepository, PreferenceRepository, SettingsRepository, StoreHealth,
    UserRepository,
};
use roster_notify::NotificationDispatcher;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    game_repo: Arc<dyn GameRepository>,
    member_repo: Arc<dyn MemberRepository>,
    preference_repo: Arc<dyn PreferenceRepository>,
    user_repo: Arc<dyn UserRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    store_health: Arc<dyn StoreHealth>,

    // Outbound
    notifier: NotificationDispatcher,

    // Services
    session_service: Arc<SessionService>,

    /// Home time zone of the clan; decides what "tomorrow" means for reminders
    reminder_offset: FixedOffset,
}

impl ServiceContext {
    /// Create a builder
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn game_repo(&self) -> &dyn GameRepository {
        self.game_repo.as_ref()
    }

    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    pub fn preference_repo(&self) -> &dyn PreferenceRepository {
        self.preference_repo.as_ref()
    }

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn settings_repo(&self) -> &dyn SettingsRepository {
        self.settings_repo.as_ref()
    }

    pub fn store_health(&self) -> &dyn StoreHealth {
        self.store_health.as_ref()
    }

    // === Outbound ===

    /// Get the notification dispatcher
    pub fn notifier(&self) -> &NotificationDispatcher {
        &self.notifier
    }

    // === Services ===

    /// Get the session token service
    pub fn session_service(&self) -> &SessionService {
        self.session_service.as_ref()
    }

    pub fn reminder_offset(&self) -> FixedOffset {
        self.reminder_offset
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("notifier", &self.notifier)
            .field("reminder_offset", &self.reminder_offset)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    game_repo: Option<Arc<dyn GameRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    preference_repo: Option<Arc<dyn PreferenceRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    settings_repo: Option<Arc<dyn SettingsRepository>>,
    store_health: Option<Arc<dyn StoreHealth>>,
    notifier: Option<NotificationDispatcher>,
    session_service: Option<Arc<SessionService>>,
    reminder_offset: Option<FixedOffset>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game_repo(mut self, repo: Arc<dyn GameRepository>) -> Self {
        self.game_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn preference_repo(mut self, repo: Arc<dyn PreferenceRepository>) -> Self {
        self.preference_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn settings_repo(mut self, repo: Arc<dyn SettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn store_health(mut self, health: Arc<dyn StoreHealth>) -> Self {
        self.store_health = Some(health);
        self
    }

    pub fn notifier(mut self, notifier: NotificationDispatcher) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn session_service(mut self, service: Arc<SessionService>) -> Self {
        self.session_service = Some(service);
        self
    }

    /// Offset of the clan's home time zone in whole hours (defaults to UTC)
    pub fn reminder_offset_hours(mut self, hours: i32) -> Self {
        self.reminder_offset = FixedOffset::east_opt(hours * 3600);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        fn required<T>(value: Option<T>, name: &str) -> ServiceResult<T> {
            value.ok_or_else(|| ServiceError::validation(format!("{name} is required")))
        }

        let utc = FixedOffset::east_opt(0)
            .ok_or_else(|| ServiceError::internal("invalid UTC offset"))?;

        Ok(ServiceContext {
            game_repo: required(self.game_repo, "game_repo")?,
            member_repo: required(self.member_repo, "member_repo")?,
            preference_repo: required(self.preference_repo, "preference_repo")?,
            user_repo: required(self.user_repo, "user_repo")?,
            settings_repo: required(self.settings_repo, "settings_repo")?,
            store_health: required(self.store_health, "store_health")?,
            notifier: required(self.notifier, "notifier")?,
            session_service: required(self.session_service, "session_service")?,
            reminder_offset: self.reminder_offset.unwrap_or(utc),
        })
    }
}
