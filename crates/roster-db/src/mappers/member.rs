//! Member entity <-> model mapper

use roster_core::entities::Member;

use crate::models::MemberModel;

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        Member {
            id: model.id,
            name: model.name,
            year: model.year,
            region: model.region,
            note: model.note,
            is_sub: model.is_sub,
            sort_order: model.sort_order,
        }
    }
}

/// Borrowed values for upserting a member
pub struct MemberInsert<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub year: i32,
    pub region: Option<&'a str>,
    pub note: Option<&'a str>,
    pub is_sub: bool,
    pub sort_order: i32,
}

impl<'a> MemberInsert<'a> {
    pub fn new(member: &'a Member) -> Self {
        Self {
            id: &member.id,
            name: &member.name,
            year: member.year,
            region: member.region.as_deref(),
            note: member.note.as_deref(),
            is_sub: member.is_sub,
            sort_order: member.sort_order,
        }
    }
}
