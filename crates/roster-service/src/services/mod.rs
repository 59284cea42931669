//! Business logic services
//!
//! Each service borrows the [`ServiceContext`] for the duration of a
//! request and talks to the stores through its repository handles.

pub mod auth;
pub mod context;
pub mod error;
pub mod game;
pub mod member;
pub mod preference;
pub mod reminder;
pub mod roster;
pub mod settings;

// Re-export all services for convenience
pub use auth::{AuthService, DiscordProfile};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use game::GameService;
pub use member::MemberService;
pub use preference::PreferenceService;
pub use reminder::{tomorrow, ReminderService};
pub use roster::RosterService;
pub use settings::{mask_webhook, SettingsService, WEBHOOK_SETTING};
