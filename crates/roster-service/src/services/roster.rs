//! Roster service
//!
//! Player self-service (availability, withdrawal) and manager roster
//! assignment. The reconciliation rules live on [`Game`]; this service loads
//! the game, applies the rule, writes the resulting columns and, for
//! withdrawals, queues the manager alert after the write succeeded.
//!
//! [`Game`]: roster_core::Game

use roster_common::SessionClaims;
use roster_core::{DomainError, Game, GameId};
use roster_notify::Notification;
use tracing::{debug, info, instrument, warn};

use crate::dto::{AssignRosterRequest, AvailabilityRequest, GameResponse, WithdrawRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::game::GameService;

/// Reject a signed-in caller acting for a different player
fn ensure_own_player(
    caller: Option<&SessionClaims>,
    player_id: &str,
    message: &'static str,
) -> Result<(), DomainError> {
    match caller {
        Some(claims) if !claims.may_act_for(player_id) => Err(DomainError::NotOwnPlayer(message)),
        _ => Ok(()),
    }
}

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mark a player available or unavailable
    #[instrument(skip(self, caller, request), fields(player_id = %request.player_id))]
    pub async fn set_availability(
        &self,
        caller: Option<&SessionClaims>,
        game_id: &GameId,
        request: AvailabilityRequest,
    ) -> ServiceResult<GameResponse> {
        let games = GameService::new(self.ctx);
        let mut game = games.load(game_id).await?;

        if request.player_id.trim().is_empty() {
            return Err(DomainError::PlayerIdRequired.into());
        }
        ensure_own_player(caller, &request.player_id, "Can only set your own availability")?;

        let update = game.set_availability(&request.player_id, request.is_available)?;
        let stored = games.store(game_id, &update).await?;

        info!(
            game_id = %game_id,
            player_id = %request.player_id,
            available = request.is_available,
            "Availability updated"
        );
        Ok(GameResponse::from(stored))
    }

    /// Replace the roster (and optionally subs)
    #[instrument(skip(self, request))]
    pub async fn assign_roster(
        &self,
        game_id: &GameId,
        request: AssignRosterRequest,
    ) -> ServiceResult<GameResponse> {
        let games = GameService::new(self.ctx);
        let mut game = games.load(game_id).await?;

        let update = game.assign_roster(request.roster, request.subs)?;
        let stored = games.store(game_id, &update).await?;

        info!(
            game_id = %game_id,
            roster = stored.roster.len(),
            team_size = stored.team_size,
            withdrawals_cleared = update.withdrawals.is_some(),
            "Roster assigned"
        );
        Ok(GameResponse::from(stored))
    }

    /// Pull a player off the roster and alert the managers
    #[instrument(skip(self, caller, request), fields(player_id = %request.player_id))]
    pub async fn withdraw(
        &self,
        caller: Option<&SessionClaims>,
        game_id: &GameId,
        request: WithdrawRequest,
    ) -> ServiceResult<GameResponse> {
        let games = GameService::new(self.ctx);
        let mut game = games.load(game_id).await?;

        if request.player_id.trim().is_empty() {
            return Err(DomainError::PlayerIdRequired.into());
        }
        ensure_own_player(caller, &request.player_id, "Can only withdraw yourself")?;

        let update = game.withdraw(&request.player_id)?;
        let stored = games.store(game_id, &update).await?;

        info!(game_id = %game_id, player_id = %request.player_id, "Player withdrew");

        self.alert_managers(&stored, &request.player_id).await;
        Ok(GameResponse::from(stored))
    }

    /// Queue the "sub needed" DM; lookup failures only cost the alert
    async fn alert_managers(&self, game: &Game, player_id: &str) {
        let managers = match self.ctx.user_repo().list_managers().await {
            Ok(managers) => managers,
            Err(e) => {
                warn!(error = %e, "Could not load managers for withdrawal alert");
                return;
            }
        };
        if managers.is_empty() {
            debug!(game_id = %game.id, "No managers to alert");
            return;
        }

        let player_name = match self.ctx.member_repo().find_by_id(player_id).await {
            Ok(Some(member)) => member.name,
            _ => player_id.to_string(),
        };

        self.ctx.notifier().dispatch(Notification::WithdrawalAlert {
            game: game.clone(),
            player_name,
            manager_ids: managers.into_iter().map(|m| m.discord_id).collect(),
        });
    }
}
