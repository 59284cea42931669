//! Game handlers
//!
//! Endpoints for scheduling and editing games.

use axum::{extract::State, Json};
use roster_service::{
    CreateGameRequest, DataResponse, GameResponse, GameService, PostSummaryRequest,
    QueuedResponse, UpdateGameRequest,
};

use crate::extractors::{GameIdPath, ManagerUser, OptionalValidatedJson, ValidatedJson};
use crate::response::{Accepted, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Games plus preferences in one payload
///
/// GET /api/data
pub async fn get_all_data(State(state): State<AppState>) -> ApiResult<Json<DataResponse>> {
    let service = GameService::new(state.service_context());
    Ok(Json(service.snapshot().await?))
}

/// List games ordered by date and time
///
/// GET /api/games
pub async fn list_games(State(state): State<AppState>) -> ApiResult<Json<Vec<GameResponse>>> {
    let service = GameService::new(state.service_context());
    Ok(Json(service.list_games().await?))
}

/// Schedule a game
///
/// POST /api/games
pub async fn create_game(
    State(state): State<AppState>,
    _manager: ManagerUser,
    ValidatedJson(request): ValidatedJson<CreateGameRequest>,
) -> ApiResult<Created<Json<GameResponse>>> {
    let service = GameService::new(state.service_context());
    let response = service.create_game(request).await?;
    Ok(Created(Json(response)))
}

/// GET /api/games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    GameIdPath(game_id): GameIdPath,
) -> ApiResult<Json<GameResponse>> {
    let service = GameService::new(state.service_context());
    Ok(Json(service.get_game(&game_id).await?))
}

/// Partial edit
///
/// PATCH /api/games/{id}
pub async fn update_game(
    State(state): State<AppState>,
    _manager: ManagerUser,
    GameIdPath(game_id): GameIdPath,
    ValidatedJson(request): ValidatedJson<UpdateGameRequest>,
) -> ApiResult<Json<GameResponse>> {
    let service = GameService::new(state.service_context());
    Ok(Json(service.update_game(&game_id, request).await?))
}

/// DELETE /api/games/{id}
pub async fn delete_game(
    State(state): State<AppState>,
    _manager: ManagerUser,
    GameIdPath(game_id): GameIdPath,
) -> ApiResult<NoContent> {
    let service = GameService::new(state.service_context());
    service.delete_game(&game_id).await?;
    Ok(NoContent)
}

/// Queue the game summary for the Discord webhook
///
/// POST /api/discord/post/{id}
pub async fn post_to_discord(
    State(state): State<AppState>,
    _manager: ManagerUser,
    GameIdPath(game_id): GameIdPath,
    OptionalValidatedJson(options): OptionalValidatedJson<PostSummaryRequest>,
) -> ApiResult<Accepted<QueuedResponse>> {
    let service = GameService::new(state.service_context());
    let response = service
        .post_summary(&game_id, options.unwrap_or_default())
        .await?;
    Ok(Accepted(response))
}
