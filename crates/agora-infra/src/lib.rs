//! # Agora Infrastructure
//!
//! Concrete implementations of the ports defined in `agora-core`.
//! This crate contains the database integration, the in-memory fallback
//! store and the system clock.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod clock;
pub mod database;

pub use clock::{FixedClock, SystemClock};
pub use database::{DatabaseConfig, InMemoryChoiceRepository, InMemoryQuestionRepository};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;
