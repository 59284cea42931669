//! Database models with SQLx `FromRow` derives

mod game;
mod member;
mod preference;
mod user;

pub use game::GameModel;
pub use member::MemberModel;
pub use preference::PreferenceModel;
pub use user::UserModel;
