//! Application error types.
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The
//! binary holds the single top-level handler that logs and swallows errors.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed configuration (e.g. `DATABASE_URL` not set).
    #[error("configuration error: {0}")]
    Config(String),

    /// The schema script could not be read.
    #[error("failed to read schema script: {0}")]
    SchemaFile(String),

    /// Connecting to the database failed.
    #[error("database connection failed: {0}")]
    DatabaseConnection(String),

    /// Executing a statement or catalog query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(String),

    /// The connection URL scheme does not name a supported engine.
    #[error("unsupported database type: {0}")]
    UnsupportedDatabaseType(String),
}
