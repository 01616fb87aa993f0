//! Database error types for pathex-db.

use thiserror::Error;

/// Errors from catalog queries. Every variant aborts an export run.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// A table name was not found in the catalog.
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
