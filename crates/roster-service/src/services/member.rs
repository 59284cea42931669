//! Member service
//!
//! The clan member list and its Discord link status.

use std::collections::HashSet;

use roster_core::entities::Member;
use roster_notify::MemberNames;
use tracing::{info, instrument};

use crate::dto::{MemberResponse, MemberWithLink, MembersResponse, UpsertMemberRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn linked_ids(&self) -> ServiceResult<HashSet<String>> {
        Ok(self
            .ctx
            .user_repo()
            .linked_player_ids()
            .await?
            .into_iter()
            .collect())
    }

    /// Members split into active players and subs, each in display order
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> ServiceResult<MembersResponse> {
        let mut members = self.ctx.member_repo().list().await?;
        members.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        let linked_ids = self.linked_ids().await?;

        let (subs, active): (Vec<&Member>, Vec<&Member>) =
            members.iter().partition(|m| m.is_sub);
        let to_response = |member: &Member| {
            MemberResponse::from(MemberWithLink {
                member,
                linked_ids: &linked_ids,
            })
        };

        Ok(MembersResponse {
            active: active.into_iter().map(to_response).collect(),
            subs: subs.into_iter().map(to_response).collect(),
        })
    }

    /// Create or replace a member
    #[instrument(skip(self, request))]
    pub async fn upsert_member(
        &self,
        member_id: &str,
        request: UpsertMemberRequest,
    ) -> ServiceResult<MemberResponse> {
        let member = Member {
            id: member_id.to_string(),
            name: request.name.trim().to_string(),
            year: request.year,
            region: request.region.filter(|r| !r.trim().is_empty()),
            note: request.note.filter(|n| !n.trim().is_empty()),
            is_sub: request.is_sub,
            sort_order: request.sort_order,
        };
        self.ctx.member_repo().upsert(&member).await?;

        info!(member_id = %member.id, is_sub = member.is_sub, "Member saved");

        let linked_ids = self.linked_ids().await?;
        Ok(MemberResponse::from(MemberWithLink {
            member: &member,
            linked_ids: &linked_ids,
        }))
    }

    /// Display names keyed by player id, for notification snapshots
    pub async fn names(&self) -> ServiceResult<MemberNames> {
        Ok(self
            .ctx
            .member_repo()
            .list()
            .await?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect())
    }
}
