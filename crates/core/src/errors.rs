//! Core error types for the Ledgerfolio pipeline.
//!
//! This module defines database-agnostic error types. Storage-specific
//! errors (from Diesel, SQLite, etc.) are converted to these types by the
//! storage layer.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the pipeline.
///
/// Only whole-run failures live here. Row-level defects in the input are
/// not errors; the validator records them as discards instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input ingestion failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage
/// layer to convert storage-specific errors (Diesel, SQLite, etc.) into
/// this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to establish a database connection.
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to create or configure the connection pool.
    #[error("Failed to create database pool: {0}")]
    PoolCreationFailed(String),

    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// Database migration failed.
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Fatal errors raised while reading the input source.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Required column(s) absent from the header row. Names are sorted.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// Input file missing or not parsable as tabular data.
    #[error("Failed to read input file '{path}': {message}")]
    Unreadable { path: String, message: String },
}
