//! PostgreSQL implementation of PreferenceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::PlayerPreference;
use roster_core::traits::{PreferenceRepository, RepoResult};

use crate::models::PreferenceModel;

use super::error::map_db_error;

/// PostgreSQL implementation of PreferenceRepository
#[derive(Clone)]
pub struct PgPreferenceRepository {
    pool: PgPool,
}

impl PgPreferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceRepository for PgPreferenceRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<PlayerPreference>> {
        let results = sqlx::query_as::<_, PreferenceModel>(
            r"
            SELECT player_id, preference, updated_at
            FROM player_preferences
            ORDER BY player_id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(PlayerPreference::try_from).collect()
    }

    #[instrument(skip(self, preference), fields(player_id = %preference.player_id))]
    async fn upsert(&self, preference: &PlayerPreference) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO player_preferences (player_id, preference, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (player_id) DO UPDATE
            SET preference = EXCLUDED.preference, updated_at = EXCLUDED.updated_at
            ",
        )
        .bind(&preference.player_id)
        .bind(preference.preference.as_str())
        .bind(preference.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
