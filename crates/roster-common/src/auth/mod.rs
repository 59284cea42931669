//! Session tokens for signed-in Discord users

mod session;

pub use session::{SessionClaims, SessionIdentity, SessionService, SessionToken};
