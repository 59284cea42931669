//! User entity <-> model mapper

use roster_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            discord_id: model.discord_id,
            username: model.username,
            display_name: model.display_name,
            avatar: model.avatar,
            player_id: model.player_id,
            is_manager: model.is_manager,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Profile fields written on sign-in; the player link is never touched here
pub struct UserUpsert<'a> {
    pub discord_id: &'a str,
    pub username: &'a str,
    pub display_name: &'a str,
    pub avatar: Option<&'a str>,
    pub is_manager: bool,
}

impl<'a> UserUpsert<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            discord_id: &user.discord_id,
            username: &user.username,
            display_name: &user.display_name,
            avatar: user.avatar.as_deref(),
            is_manager: user.is_manager,
        }
    }
}
