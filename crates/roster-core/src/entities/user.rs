//! User entity - a Discord account known to the app

use chrono::{DateTime, Utc};

/// Discord identity, optionally linked to a clan member id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub discord_id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub player_id: Option<String>,
    pub is_manager: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new, unlinked user
    pub fn new(
        discord_id: impl Into<String>,
        username: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            discord_id: discord_id.into(),
            username: username.into(),
            display_name: display_name.into(),
            avatar: None,
            player_id: None,
            is_manager: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name to show in the UI, falling back to the account username
    pub fn visible_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }

    /// Discord CDN avatar URL, if the user has one
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar.as_ref().map(|hash| {
            format!(
                "https://cdn.discordapp.com/avatars/{}/{}.png",
                self.discord_id, hash
            )
        })
    }

    #[inline]
    pub fn is_linked_to(&self, player_id: &str) -> bool {
        self.player_id.as_deref() == Some(player_id)
    }
}
