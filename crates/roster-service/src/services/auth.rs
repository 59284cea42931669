//! Authentication service
//!
//! Sessions are bearer tokens minted by [`SessionService`]. Signing in with
//! Discord happens elsewhere; once the profile is known, [`AuthService::sign_in`]
//! records the user and issues the token.
//!
//! [`SessionService`]: roster_common::SessionService

use roster_common::{SessionClaims, SessionIdentity};
use roster_core::entities::User;
use roster_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{LinkPlayerRequest, LinkResponse, MeResponse, SessionResponse, SignInResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile data obtained from Discord at sign-in
#[derive(Debug, Clone)]
pub struct DiscordProfile {
    pub discord_id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub is_manager: bool,
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record the user and mint a session
    ///
    /// An existing player link is kept; the profile fields and manager flag
    /// are refreshed.
    #[instrument(skip(self, profile), fields(discord_id = %profile.discord_id))]
    pub async fn sign_in(&self, profile: DiscordProfile) -> ServiceResult<SignInResponse> {
        let mut user = User::new(&profile.discord_id, &profile.username, &profile.display_name);
        user.avatar = profile.avatar;
        user.is_manager = profile.is_manager;
        self.ctx.user_repo().upsert(&user).await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_discord_id(&profile.discord_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(profile.discord_id.clone()))?;

        let token = self.ctx.session_service().issue(&SessionIdentity {
            discord_id: user.discord_id.clone(),
            username: user.username.clone(),
            player_id: user.player_id.clone(),
            is_manager: user.is_manager,
        })?;

        info!(is_manager = user.is_manager, linked = user.player_id.is_some(), "User signed in");

        Ok(SignInResponse {
            session: SessionResponse::from(token),
            user: me_response(&user),
        })
    }

    /// Current session details, enriched from the store when the user exists
    #[instrument(skip(self, caller))]
    pub async fn me(&self, caller: Option<&SessionClaims>) -> ServiceResult<MeResponse> {
        let Some(claims) = caller else {
            return Ok(MeResponse::anonymous());
        };

        let user = self
            .ctx
            .user_repo()
            .find_by_discord_id(claims.discord_id())
            .await?;

        Ok(match user {
            Some(user) => me_response(&user),
            None => MeResponse {
                authenticated: true,
                discord_id: Some(claims.discord_id().to_string()),
                username: Some(claims.username.clone()),
                display_name: None,
                avatar: None,
                player_id: claims.player_id.clone(),
                is_manager: claims.is_manager,
            },
        })
    }

    /// Claim a player id for the caller's Discord account
    ///
    /// A player id belongs to at most one account; claiming one held by
    /// someone else is a conflict. Returns a fresh session carrying the id.
    #[instrument(skip(self, claims, request), fields(discord_id = %claims.discord_id()))]
    pub async fn link_player(
        &self,
        claims: &SessionClaims,
        request: LinkPlayerRequest,
    ) -> ServiceResult<LinkResponse> {
        let player_id = request.player_id.trim();
        if player_id.is_empty() {
            return Err(DomainError::PlayerIdRequired.into());
        }

        if let Some(owner) = self.ctx.user_repo().find_by_player_id(player_id).await? {
            if owner.discord_id != claims.discord_id() {
                return Err(DomainError::PlayerAlreadyLinked.into());
            }
        }

        self.ctx
            .user_repo()
            .link_player(claims.discord_id(), player_id)
            .await?;

        let token = self.ctx.session_service().issue(&SessionIdentity {
            discord_id: claims.discord_id().to_string(),
            username: claims.username.clone(),
            player_id: Some(player_id.to_string()),
            is_manager: claims.is_manager,
        })?;

        info!(player_id = %player_id, "Player linked");

        Ok(LinkResponse {
            success: true,
            player_id: player_id.to_string(),
            session: SessionResponse::from(token),
        })
    }
}

fn me_response(user: &User) -> MeResponse {
    MeResponse {
        authenticated: true,
        discord_id: Some(user.discord_id.clone()),
        username: Some(user.username.clone()),
        display_name: Some(user.visible_name().to_string()),
        avatar: user.avatar_url(),
        player_id: user.player_id.clone(),
        is_manager: user.is_manager,
    }
}
