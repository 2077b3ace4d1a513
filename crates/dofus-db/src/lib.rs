//! # dofus-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `dofus-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, with team mutations guarded by row locks
//!
//! An [`InMemoryStore`] implements the same traits without a database.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dofus_db::pool::{create_pool, DatabaseConfig};
//! use dofus_db::repositories::PgEventRepository;
//! use dofus_core::traits::EventRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let events = PgEventRepository::new(pool);
//!
//!     let upcoming = events.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{
    create_pool, create_pool_from_env, ping, run_migrations, DatabaseConfig, PgPool,
};
pub use repositories::{PgCharacterRepository, PgEventRepository, PgRosterRepository};
