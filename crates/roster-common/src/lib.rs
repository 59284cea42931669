//! # roster-common
//!
//! Shared utilities including configuration, error handling, sessions, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{SessionClaims, SessionIdentity, SessionService, SessionToken};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, DiscordConfig, Environment,
    HttpConfig, InternalApiConfig, NotifyConfig, RateLimitConfig, ReminderConfig, ServerConfig,
    SessionConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{
    init_tracing, init_tracing_with_config, try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError,
};
