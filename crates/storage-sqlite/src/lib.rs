//! SQLite storage implementation for Ledgerfolio.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository trait defined in
//! `ledgerfolio-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The holdings repository implementation
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel
//! dependencies exist. The `core` crate is database-agnostic and works
//! with traits.

pub mod db;
pub mod errors;
pub mod holdings;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export the repository implementation
pub use holdings::HoldingRepository;

// Re-export from ledgerfolio-core for convenience
pub use ledgerfolio_core::errors::{DatabaseError, Error, Result};
