//! Store error types.

/// Errors building a content store. Individual fetches never return these;
/// they report a [`crate::FetchOutcome`] instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Object store construction failed (bad bucket, region, endpoint, ...).
    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    /// Required configuration is missing.
    #[error("Store not configured: {0}")]
    NotConfigured(String),
}
