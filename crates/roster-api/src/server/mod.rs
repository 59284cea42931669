//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use roster_common::{AppConfig, AppError, SessionService};
use roster_db::{
    create_pool, run_migrations, PgGameRepository, PgMemberRepository, PgPreferenceRepository,
    PgSettingsRepository, PgStoreHealth, PgUserRepository,
};
use roster_notify::{DiscordClientConfig, DispatcherConfig, HttpDiscordClient, NotificationDispatcher};
use roster_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_rate_limit};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes get the common layers but bypass rate limiting.
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    let api = apply_middleware_with_rate_limit(create_router(), &config);
    let health = apply_middleware(health_routes(), &config);

    health.merge(api).with_state(state)
}

/// Start the notification runner against the real Discord API
pub fn create_dispatcher(config: &AppConfig) -> Result<NotificationDispatcher, AppError> {
    let client = HttpDiscordClient::new(DiscordClientConfig {
        api_base: config.discord.api_base.clone(),
        bot_token: config.discord.bot_token.clone(),
        timeout: Duration::from_secs(config.discord.timeout_seconds),
    })
    .map_err(|e| AppError::Config(format!("Discord client: {e}")))?;

    if config.discord.bot_token.is_none() {
        info!("DISCORD_BOT_TOKEN not set, direct messages will be dead-lettered");
    }

    Ok(NotificationDispatcher::spawn(
        Arc::new(client),
        DispatcherConfig {
            queue_capacity: config.notify.queue_capacity,
            dead_letter_capacity: config.notify.dead_letter_capacity,
        },
    ))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = roster_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool, &db_config.migrations_dir)
        .await
        .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;

    let session_service = Arc::new(SessionService::new(
        &config.session.secret,
        config.session.ttl_seconds,
    ));
    let notifier = create_dispatcher(&config)?;

    let service_context = ServiceContext::builder()
        .game_repo(Arc::new(PgGameRepository::new(pool.clone())))
        .member_repo(Arc::new(PgMemberRepository::new(pool.clone())))
        .preference_repo(Arc::new(PgPreferenceRepository::new(pool.clone())))
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .settings_repo(Arc::new(PgSettingsRepository::new(pool.clone())))
        .store_health(Arc::new(PgStoreHealth::new(pool)))
        .notifier(notifier)
        .session_service(session_service)
        .reminder_offset_hours(config.reminders.utc_offset_hours)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until Ctrl-C or SIGTERM
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
