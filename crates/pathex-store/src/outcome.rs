//! Result of a single best-effort content fetch.

use serde::Serialize;

/// What happened when fetching one object.
///
/// A failed fetch is not an error for the caller: metadata export goes on and
/// the content file is left absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    Fetched { key: String, bytes: u64 },
    Failed { key: String, reason: String },
}

impl FetchOutcome {
    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }

    /// Remote key the fetch was attempted against (namespace included).
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Fetched { key, .. } | Self::Failed { key, .. } => key,
        }
    }
}
