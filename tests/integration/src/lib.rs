//! Integration test utilities for the clan roster server
//!
//! The API is served over a real socket with in-memory stores behind it and
//! a mock Discord API on a second socket, so the suite needs no external
//! services.

pub mod fixtures;
pub mod helpers;
pub mod memory;

pub use discord::*;
pub use fixtures::*;
pub use helpers::*;
pub use memory::*;
