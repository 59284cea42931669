//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, DiscordConfig, Environment,
    HttpConfig, InternalApiConfig, NotifyConfig, RateLimitConfig, ReminderConfig, ServerConfig,
    SessionConfig,
};
