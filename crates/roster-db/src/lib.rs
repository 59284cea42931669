//! # roster-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `roster-core`. It handles:
//!
//! - Connection pool management and schema migrations (including the initial
//!   member roster)
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use roster_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use roster_db::repositories::PgGameRepository;
//! use roster_core::traits::GameRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool, &config.migrations_dir).await?;
//!     let games = PgGameRepository::new(pool);
//!
//!     let upcoming = games.list().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgGameRepository, PgMemberRepository, PgPreferenceRepository, PgSettingsRepository,
    PgStoreHealth, PgUserRepository,
};
