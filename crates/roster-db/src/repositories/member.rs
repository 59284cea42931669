//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use roster_core::entities::Member;
use roster_core::traits::{MemberRepository, RepoResult};

use crate::mappers::MemberInsert;
use crate::models::MemberModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Member>> {
        let results = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, year, region, note, is_sub, sort_order
            FROM members
            ORDER BY sort_order ASC, name ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, year, region, note, is_sub, sort_order
            FROM members
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self, member), fields(member_id = %member.id))]
    async fn upsert(&self, member: &Member) -> RepoResult<()> {
        let insert = MemberInsert::new(member);

        sqlx::query(
            r"
            INSERT INTO members (id, name, year, region, note, is_sub, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                year = EXCLUDED.year,
                region = EXCLUDED.region,
                note = EXCLUDED.note,
                is_sub = EXCLUDED.is_sub,
                sort_order = EXCLUDED.sort_order
            ",
        )
        .bind(insert.id)
        .bind(insert.name)
        .bind(insert.year)
        .bind(insert.region)
        .bind(insert.note)
        .bind(insert.is_sub)
        .bind(insert.sort_order)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
