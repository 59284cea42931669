//! Game service
//!
//! Scheduling, listing, editing and deleting games, plus the webhook
//! summary post.

use std::collections::BTreeMap;

use roster_core::entities::{Game, GameUpdate, NewGame};
use roster_core::GameId;
use roster_notify::Notification;
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    CreateGameRequest, DataResponse, GameResponse, PostSummaryRequest, QueuedResponse,
    UpdateGameRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::member::MemberService;
use super::settings::SettingsService;

/// Game service
pub struct GameService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GameService<'a> {
    /// Create a new GameService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load a game or fail with `NotFound`
    pub(crate) async fn load(&self, game_id: &GameId) -> ServiceResult<Game> {
        self.ctx
            .game_repo()
            .find_by_id(game_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", game_id.as_str()))
    }

    /// Write a computed update and return the stored row
    pub(crate) async fn store(&self, game_id: &GameId, update: &GameUpdate) -> ServiceResult<Game> {
        self.ctx
            .game_repo()
            .update(game_id, update)
            .await?
            .ok_or_else(|| ServiceError::not_found("Game", game_id.as_str()))
    }

    /// All games ordered by date and time
    #[instrument(skip(self))]
    pub async fn list_games(&self) -> ServiceResult<Vec<GameResponse>> {
        let games = self.ctx.game_repo().list().await?;
        Ok(games.iter().map(GameResponse::from).collect())
    }

    /// Get one game
    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: &GameId) -> ServiceResult<GameResponse> {
        Ok(GameResponse::from(self.load(game_id).await?))
    }

    /// Games plus every player's preference
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> ServiceResult<DataResponse> {
        let games = self.list_games().await?;
        let player_preferences: BTreeMap<String, String> = self
            .ctx
            .preference_repo()
            .list()
            .await?
            .into_iter()
            .map(|p| (p.player_id, p.preference.as_str().to_string()))
            .collect();

        Ok(DataResponse {
            games,
            player_preferences,
        })
    }

    /// Schedule a game and announce it when a webhook is configured
    #[instrument(skip(self, request))]
    pub async fn create_game(&self, request: CreateGameRequest) -> ServiceResult<GameResponse> {
        let game = Game::schedule(NewGame::from(request))?;
        self.ctx.game_repo().create(&game).await?;

        info!(game_id = %game.id, date = %game.date, opponent = %game.opponent, "Game created");

        self.announce(&game).await;
        Ok(GameResponse::from(game))
    }

    /// Queue the new-game webhook; the game is already stored, so lookup
    /// failures are logged and the announcement skipped
    async fn announce(&self, game: &Game) {
        let webhook_url = match SettingsService::new(self.ctx).webhook_url().await {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!(game_id = %game.id, "No webhook configured, skipping announcement");
                return;
            }
            Err(e) => {
                warn!(game_id = %game.id, error = %e, "Could not read webhook setting, skipping announcement");
                return;
            }
        };

        let names = match MemberService::new(self.ctx).names().await {
            Ok(names) => names,
            Err(e) => {
                warn!(game_id = %game.id, error = %e, "Could not load member names, skipping announcement");
                return;
            }
        };

        self.ctx.notifier().dispatch(Notification::NewGame {
            webhook_url,
            game: game.clone(),
            names,
        });
    }

    /// Apply a manager's partial edit
    #[instrument(skip(self, request))]
    pub async fn update_game(
        &self,
        game_id: &GameId,
        request: UpdateGameRequest,
    ) -> ServiceResult<GameResponse> {
        let mut game = self.load(game_id).await?;
        let update = game.apply_edit(GameUpdate::from(request))?;

        if update.is_empty() {
            return Ok(GameResponse::from(game));
        }

        let stored = self.store(game_id, &update).await?;
        info!(game_id = %game_id, "Game updated");
        Ok(GameResponse::from(stored))
    }

    /// Hard delete
    #[instrument(skip(self))]
    pub async fn delete_game(&self, game_id: &GameId) -> ServiceResult<()> {
        if !self.ctx.game_repo().delete(game_id).await? {
            return Err(ServiceError::not_found("Game", game_id.as_str()));
        }
        info!(game_id = %game_id, "Game deleted");
        Ok(())
    }

    /// Queue the summary embed for the configured webhook
    ///
    /// Delivery happens after the response; only the webhook and the game
    /// are checked up front.
    #[instrument(skip(self))]
    pub async fn post_summary(
        &self,
        game_id: &GameId,
        options: PostSummaryRequest,
    ) -> ServiceResult<QueuedResponse> {
        let webhook_url = SettingsService::new(self.ctx)
            .webhook_url()
            .await?
            .ok_or_else(|| ServiceError::validation("Discord webhook not configured"))?;
        let game = self.load(game_id).await?;

        let mut mentions = Vec::new();
        if options.mention_players {
            for player_id in &game.roster {
                if let Some(user) = self.ctx.user_repo().find_by_player_id(player_id).await? {
                    mentions.push(user.discord_id);
                }
            }
        }

        let names = MemberService::new(self.ctx).names().await?;
        self.ctx.notifier().dispatch(Notification::GameSummary {
            webhook_url,
            game,
            names,
            mentions,
        });

        info!(game_id = %game_id, "Game summary queued");
        Ok(QueuedResponse::queued())
    }
}
