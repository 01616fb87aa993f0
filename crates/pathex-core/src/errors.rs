//! Cross-cutting error types for pathex.
//!
//! Domain-specific errors (`DatabaseError`, `StoreError`, `ExportError`) are
//! defined in their respective crates.

use thiserror::Error;

/// Errors raised while reading typed attributes out of a [`crate::Record`].
#[derive(Debug, Error)]
pub enum CoreError {
    /// The record has no column with this name.
    #[error("Missing attribute '{column}'")]
    MissingAttribute { column: String },

    /// The column exists but holds SQL NULL.
    #[error("Attribute '{column}' is null")]
    NullAttribute { column: String },
}
