//! # roster-service
//!
//! Application layer containing the roster use cases, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::*;
