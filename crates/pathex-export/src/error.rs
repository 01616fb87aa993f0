//! Export error types.

use std::path::PathBuf;

use pathex_core::{CoreError, Level};
use pathex_db::error::DatabaseError;
use thiserror::Error;

/// Errors that abort an export run. Content fetch failures and slides
/// without images are not errors; they are counted in the report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A catalog query failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// A record lacked a required attribute (e.g. `Id`).
    #[error("Record error: {0}")]
    Record(#[from] CoreError),

    /// A directory-level record has no usable display value.
    #[error("{level} record has no usable '{column}' to name its directory")]
    MissingDisplayName { level: Level, column: &'static str },

    /// Creating a directory or writing a metadata file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
