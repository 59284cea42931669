//! Preference service

use std::collections::BTreeMap;

use roster_common::SessionClaims;
use roster_core::entities::PlayerPreference;
use roster_core::{DomainError, PreferenceKind};
use tracing::{info, instrument};

use crate::dto::{PreferenceResponse, SetPreferenceRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Starter/sub preference per player
pub struct PreferenceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PreferenceService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Map of player id to `"starter"` / `"sub"`
    #[instrument(skip(self))]
    pub async fn list_preferences(&self) -> ServiceResult<BTreeMap<String, String>> {
        Ok(self
            .ctx
            .preference_repo()
            .list()
            .await?
            .into_iter()
            .map(|p| (p.player_id, p.preference.as_str().to_string()))
            .collect())
    }

    /// Upsert a preference; latest write wins
    #[instrument(skip(self, caller, request))]
    pub async fn set_preference(
        &self,
        caller: Option<&SessionClaims>,
        player_id: &str,
        request: SetPreferenceRequest,
    ) -> ServiceResult<PreferenceResponse> {
        let kind = PreferenceKind::parse(&request.preference)
            .map_err(|_| DomainError::InvalidPreference)?;

        if let Some(claims) = caller {
            if !claims.may_act_for(player_id) {
                return Err(DomainError::NotOwnPlayer("Can only set your own preference").into());
            }
        }

        let preference = PlayerPreference::new(player_id, kind);
        self.ctx.preference_repo().upsert(&preference).await?;

        info!(player_id = %player_id, preference = kind.as_str(), "Preference saved");
        Ok(PreferenceResponse::from(&preference))
    }
}
