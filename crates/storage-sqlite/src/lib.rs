//! SQLite storage implementation for gymtrack.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `gymtrack-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for all domain entities
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The `core` crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!      storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```
//!
//! All writes go through a single writer actor. Each job runs inside one
//! immediate transaction, which is what makes the enrollment commit and the
//! schedule replacement atomic.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod medical;
pub mod members;
pub mod onboarding;
pub mod packages;
pub mod schedules;
pub mod transactions;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from gymtrack-core for convenience
pub use gymtrack_core::errors::{DatabaseError, Error, Result};
