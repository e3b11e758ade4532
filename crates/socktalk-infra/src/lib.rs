//! # SockTalk Infrastructure
//!
//! Concrete implementations of the ports defined in `socktalk-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post store via SeaORM
//!
//! Without `postgres` only the in-memory store is available.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;
