//! Reminder service
//!
//! Backs the internal endpoints used by the day-before reminder job: which
//! games still owe a reminder, who to DM, and marking games as reminded.

use chrono::{DateTime, Days, FixedOffset, Utc};
use roster_core::GameId;
use roster_notify::{reminder_text, DeadLetter, Notification};
use tracing::{info, instrument};

use crate::dto::{DiscordIdResponse, GameResponse, ReminderRunResponse, SuccessResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::game::GameService;

/// `YYYY-MM-DD` of the day after `now` in the given zone
pub fn tomorrow(now: DateTime<Utc>, offset: FixedOffset) -> String {
    let local = now.with_timezone(&offset).date_naive();
    local
        .checked_add_days(Days::new(1))
        .unwrap_or(local)
        .format("%Y-%m-%d")
        .to_string()
}

pub struct ReminderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReminderService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn reminder_date(&self) -> String {
        tomorrow(Utc::now(), self.ctx.reminder_offset())
    }

    /// Games dated tomorrow with a roster and no reminder sent yet
    #[instrument(skip(self))]
    pub async fn pending_reminders(&self) -> ServiceResult<Vec<GameResponse>> {
        let date = self.reminder_date();
        let games = self.ctx.game_repo().find_pending_reminders(&date).await?;
        Ok(games.iter().map(GameResponse::from).collect())
    }

    /// Set `reminded`; repeated calls are no-ops
    #[instrument(skip(self))]
    pub async fn mark_reminded(&self, game_id: &GameId) -> ServiceResult<SuccessResponse> {
        let games = GameService::new(self.ctx);
        let mut game = games.load(game_id).await?;

        if let Some(update) = game.mark_reminded() {
            games.store(game_id, &update).await?;
            info!(game_id = %game_id, "Game marked reminded");
        }
        Ok(SuccessResponse::ok())
    }

    /// Discord id linked to a player
    #[instrument(skip(self))]
    pub async fn discord_id_for_player(&self, player_id: &str) -> ServiceResult<DiscordIdResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_player_id(player_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Discord account for player", player_id))?;

        Ok(DiscordIdResponse {
            discord_id: user.discord_id,
        })
    }

    /// Queue a reminder DM for every linked roster player of each pending
    /// game, then mark the game reminded
    #[instrument(skip(self))]
    pub async fn send_reminders(&self) -> ServiceResult<ReminderRunResponse> {
        let date = self.reminder_date();
        let pending = self.ctx.game_repo().find_pending_reminders(&date).await?;
        let games = GameService::new(self.ctx);
        let mut outcome = ReminderRunResponse::default();

        for mut game in pending {
            let content = reminder_text(&game);
            for player_id in &game.roster {
                match self.ctx.user_repo().find_by_player_id(player_id).await? {
                    Some(user) => {
                        self.ctx.notifier().dispatch(Notification::DirectMessage {
                            discord_user_id: user.discord_id,
                            content: content.clone(),
                        });
                        outcome.messages_queued += 1;
                    }
                    None => outcome.players_without_discord.push(player_id.clone()),
                }
            }

            if let Some(update) = game.mark_reminded() {
                games.store(&game.id, &update).await?;
            }
            outcome.games_reminded += 1;
            info!(game_id = %game.id, "Reminders queued");
        }

        info!(
            date = %date,
            games = outcome.games_reminded,
            messages = outcome.messages_queued,
            "Reminder run finished"
        );
        Ok(outcome)
    }

    /// Recent notification failures, oldest first
    pub fn dead_letters(&self) -> Vec<DeadLetter> {
        self.ctx.notifier().dead_letters().entries()
    }
}
