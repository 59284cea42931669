//! PostgreSQL implementation of GameRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use roster_core::entities::{ColumnValue, Game, GameUpdate};
use roster_core::traits::{GameRepository, RepoResult};
use roster_core::value_objects::{GameColumn, GameId};

use crate::mappers::GameInsert;
use crate::models::GameModel;

use super::error::{game_exists, map_db_error, map_unique_violation};

/// PostgreSQL implementation of GameRepository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Create a new PgGameRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Write one column of one game; returns the number of rows touched
    async fn write_column(
        &self,
        id: &GameId,
        column: GameColumn,
        value: ColumnValue<'_>,
    ) -> RepoResult<u64> {
        let query = sqlx::query(column_update_sql(column));
        let query = match value {
            ColumnValue::Text(v) => query.bind(v),
            ColumnValue::Int(v) => query.bind(v),
            ColumnValue::List(v) => query.bind(v),
            ColumnValue::Flag(v) => query.bind(v),
        };

        let result = query
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

/// Single-column UPDATE statement for each writable column
///
/// `reminded` is OR-ed so a stored `true` can never be cleared.
fn column_update_sql(column: GameColumn) -> &'static str {
    match column {
        GameColumn::Date => "UPDATE games SET date = $1 WHERE id = $2",
        GameColumn::Time => "UPDATE games SET time = $1 WHERE id = $2",
        GameColumn::Opponent => "UPDATE games SET opponent = $1 WHERE id = $2",
        GameColumn::League => "UPDATE games SET league = $1 WHERE id = $2",
        GameColumn::Division => "UPDATE games SET division = $1 WHERE id = $2",
        GameColumn::GameMode => "UPDATE games SET game_mode = $1 WHERE id = $2",
        GameColumn::TeamSize => "UPDATE games SET team_size = $1 WHERE id = $2",
        GameColumn::Notes => "UPDATE games SET notes = $1 WHERE id = $2",
        GameColumn::Available => "UPDATE games SET available = $1 WHERE id = $2",
        GameColumn::Unavailable => "UPDATE games SET unavailable = $1 WHERE id = $2",
        GameColumn::Roster => "UPDATE games SET roster = $1 WHERE id = $2",
        GameColumn::Subs => "UPDATE games SET subs = $1 WHERE id = $2",
        GameColumn::Withdrawals => "UPDATE games SET withdrawals = $1 WHERE id = $2",
        GameColumn::Reminded => "UPDATE games SET reminded = reminded OR $1 WHERE id = $2",
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &GameId) -> RepoResult<Option<Game>> {
        let result = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, date, time, opponent, league, division, game_mode, team_size, notes,
                   available, unavailable, roster, subs, withdrawals, reminded, created_at
            FROM games
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Game::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Game>> {
        let results = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, date, time, opponent, league, division, game_mode, team_size, notes,
                   available, unavailable, roster, subs, withdrawals, reminded, created_at
            FROM games
            ORDER BY date ASC, time ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_pending_reminders(&self, date: &str) -> RepoResult<Vec<Game>> {
        let results = sqlx::query_as::<_, GameModel>(
            r"
            SELECT id, date, time, opponent, league, division, game_mode, team_size, notes,
                   available, unavailable, roster, subs, withdrawals, reminded, created_at
            FROM games
            WHERE date = $1 AND reminded = FALSE AND cardinality(roster) > 0
            ORDER BY time ASC
            ",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Game::from).collect())
    }

    #[instrument(skip(self, game), fields(game_id = %game.id))]
    async fn create(&self, game: &Game) -> RepoResult<()> {
        let insert = GameInsert::new(game);

        sqlx::query(
            r"
            INSERT INTO games (id, date, time, opponent, league, division, game_mode, team_size, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ",
        )
        .bind(insert.id)
        .bind(insert.date)
        .bind(insert.time)
        .bind(insert.opponent)
        .bind(insert.league)
        .bind(insert.division)
        .bind(insert.game_mode)
        .bind(insert.team_size)
        .bind(insert.notes)
        .bind(game.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || game_exists(&game.id)))?;

        Ok(())
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: &GameId, update: &GameUpdate) -> RepoResult<Option<Game>> {
        let Some(current) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        for (column, value) in update.write_plan(&current) {
            let rows = self.write_column(id, column, value).await?;
            if rows == 0 {
                return Ok(None);
            }
            debug!(game_id = %id, column = %column, "Game column written");
        }

        self.find_by_id(id).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &GameId) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
