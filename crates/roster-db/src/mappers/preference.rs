//! Player preference model -> entity mapper

use roster_core::entities::PlayerPreference;
use roster_core::error::DomainError;
use roster_core::value_objects::PreferenceKind;

use crate::models::PreferenceModel;

impl TryFrom<PreferenceModel> for PlayerPreference {
    type Error = DomainError;

    fn try_from(model: PreferenceModel) -> Result<Self, Self::Error> {
        let preference = PreferenceKind::parse(&model.preference)
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(PlayerPreference {
            player_id: model.player_id,
            preference,
            updated_at: model.updated_at,
        })
    }
}
