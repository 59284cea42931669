//! Entity to model mappers
//!
//! Conversions between domain entities (roster-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database writes

mod game;
mod member;
mod preference;
mod user;

pub use game::GameInsert;
pub use member::MemberInsert;
pub use user::UserUpsert;
