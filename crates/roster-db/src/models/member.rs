//! Member database model

use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub region: Option<String>,
    pub note: Option<String>,
    pub is_sub: bool,
    pub sort_order: i32,
}
