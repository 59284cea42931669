//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod games;
pub mod health;
pub mod internal;
pub mod members;
pub mod preferences;
pub mod roster;
pub mod settings;
