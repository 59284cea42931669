//! Route definitions
//!
//! Public, manager and internal routes. Health routes are exported separately
//! so they can bypass rate limiting.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, games, health, internal, members, preferences, roster, settings};
use crate::state::AppState;

/// Create the main router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Session routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(auth::me))
        .route("/auth/link", post(auth::link_player))
        .route("/auth/logout", post(auth::logout))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/data", get(games::get_all_data))
        .merge(game_routes())
        .merge(member_routes())
        .merge(settings_routes())
        .nest("/internal", internal_routes())
}

/// Game and roster routes
fn game_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(games::list_games).post(games::create_game))
        .route(
            "/games/:id",
            get(games::get_game)
                .patch(games::update_game)
                .delete(games::delete_game),
        )
        .route("/games/:id/roster", put(roster::assign_roster))
        .route("/games/:id/availability", post(roster::set_availability))
        .route("/games/:id/withdraw", post(roster::withdraw))
        .route("/discord/post/:id", post(games::post_to_discord))
}

/// Member and preference routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members/:id", put(members::upsert_member))
        .route("/preferences", get(preferences::list_preferences))
        .route("/preferences/:player_id", put(preferences::set_preference))
}

fn settings_routes() -> Router<AppState> {
    Router::new().route(
        "/webhook",
        get(settings::get_webhook).put(settings::set_webhook),
    )
}

/// Routes called by the reminder job, guarded by the internal token
fn internal_routes() -> Router<AppState> {
    Router::new()
        .route("/pending-reminders", get(internal::pending_reminders))
        .route("/mark-reminded/:id", post(internal::mark_reminded))
        .route("/user-discord/:player_id", get(internal::user_discord_id))
        .route("/send-reminders", post(internal::send_reminders))
        .route("/dead-letters", get(internal::dead_letters))
}
