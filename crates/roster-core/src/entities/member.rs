//! Member entity - a roster-eligible clan identity

/// Clan member that can be placed on a game roster
///
/// `is_sub` marks veterans kept on the bench list; it is unrelated to a
/// game's own `subs` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub year: i32,
    pub region: Option<String>,
    pub note: Option<String>,
    pub is_sub: bool,
    pub sort_order: i32,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            year,
            region: None,
            note: None,
            is_sub: false,
            sort_order: 0,
        }
    }

    /// Ordering used when listing members
    pub fn sort_key(&self) -> (i32, &str) {
        (self.sort_order, self.name.as_str())
    }
}
