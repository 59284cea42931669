//! Axum extractors for request handling
//!
//! Custom extractors for sessions, the internal token, paths, and validation.

mod auth;
mod internal;
mod path;
mod validated;

pub use auth::{AuthUser, ManagerUser, OptionalAuthUser};
pub use internal::{InternalCaller, INTERNAL_TOKEN_HEADER};
pub use path::{GameIdPath, PlayerIdPath};
pub use validated::{OptionalValidatedJson, ValidatedJson};
