//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::User;
use roster_core::error::DomainError;
use roster_core::traits::{RepoResult, UserRepository};

use crate::mappers::UserUpsert;
use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_discord_id(&self, discord_id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT discord_id, username, display_name, avatar, player_id, is_manager,
                   created_at, updated_at
            FROM users
            WHERE discord_id = $1
            ",
        )
        .bind(discord_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_player_id(&self, player_id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT discord_id, username, display_name, avatar, player_id, is_manager,
                   created_at, updated_at
            FROM users
            WHERE player_id = $1
            ",
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn list_managers(&self) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT discord_id, username, display_name, avatar, player_id, is_manager,
                   created_at, updated_at
            FROM users
            WHERE is_manager = TRUE
            ORDER BY username ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn linked_player_ids(&self) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT player_id FROM users WHERE player_id IS NOT NULL ORDER BY player_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, user), fields(discord_id = %user.discord_id))]
    async fn upsert(&self, user: &User) -> RepoResult<()> {
        let upsert = UserUpsert::new(user);

        sqlx::query(
            r"
            INSERT INTO users (discord_id, username, display_name, avatar, is_manager, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            ON CONFLICT (discord_id) DO UPDATE
            SET username = EXCLUDED.username,
                display_name = EXCLUDED.display_name,
                avatar = EXCLUDED.avatar,
                is_manager = EXCLUDED.is_manager,
                updated_at = NOW()
            ",
        )
        .bind(upsert.discord_id)
        .bind(upsert.username)
        .bind(upsert.display_name)
        .bind(upsert.avatar)
        .bind(upsert.is_manager)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn link_player(&self, discord_id: &str, player_id: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET player_id = $2, updated_at = NOW()
            WHERE discord_id = $1
            ",
        )
        .bind(discord_id)
        .bind(player_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PlayerAlreadyLinked))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(discord_id));
        }

        Ok(())
    }
}
