//! # pathex-store
//!
//! Fetches slide content from an object store onto the local filesystem.
//!
//! [`BlobFetch`] is the seam the export walker depends on. Fetches are
//! best-effort: every call returns a [`FetchOutcome`], never an error, and the
//! failure reason is logged. [`ObjectStoreFetcher`] implements it over any
//! `object_store` backend; production builds an S3 store from [`S3Config`].

pub mod error;
pub mod outcome;

use std::future::Future;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use futures_util::{Stream, StreamExt};
use object_store::ObjectStore;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as ObjectPath;
use pathex_config::S3Config;
use tokio::io::AsyncWriteExt;

pub use error::StoreError;
pub use outcome::FetchOutcome;

/// Copies one named remote object to one local path.
pub trait BlobFetch {
    /// Fetch `key` (relative to the collection namespace) into `dest`.
    fn fetch(&self, key: &str, dest: &Path) -> impl Future<Output = FetchOutcome> + Send;
}

/// [`BlobFetch`] over an `object_store` backend.
pub struct ObjectStoreFetcher {
    store: Arc<dyn ObjectStore>,
    namespace: String,
}

impl ObjectStoreFetcher {
    /// Wrap an existing store. Keys are looked up under `namespace/`.
    pub fn new(store: Arc<dyn ObjectStore>, namespace: impl Into<String>) -> Self {
        Self {
            store,
            namespace: namespace.into(),
        }
    }

    /// Build an S3-backed fetcher.
    ///
    /// Standard `AWS_*` environment variables are read first; non-empty
    /// config fields override them.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotConfigured`] without a bucket, and
    /// [`StoreError::ObjectStore`] if the builder rejects the settings.
    pub fn from_s3_config(config: &S3Config) -> Result<Self, StoreError> {
        if config.bucket.is_empty() {
            return Err(StoreError::NotConfigured("s3.bucket is empty".to_string()));
        }

        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(&config.bucket)
            .with_allow_http(config.allow_http);
        if !config.region.is_empty() {
            builder = builder.with_region(&config.region);
        }
        if config.has_explicit_credentials() {
            builder = builder
                .with_access_key_id(&config.access_key_id)
                .with_secret_access_key(&config.secret_access_key);
        }
        if !config.endpoint.is_empty() {
            builder = builder.with_endpoint(&config.endpoint);
        }

        let store = builder.build()?;
        tracing::debug!(bucket = %config.bucket, namespace = %config.namespace, "S3 store ready");
        Ok(Self::new(Arc::new(store), config.namespace.clone()))
    }

    /// Full remote key for a key inside the collection.
    #[must_use]
    pub fn remote_key(&self, key: &str) -> String {
        if self.namespace.is_empty() {
            key.to_string()
        } else {
            format!("{}/{key}", self.namespace.trim_end_matches('/'))
        }
    }

    async fn download(&self, remote_key: &str, dest: &Path) -> Result<u64, String> {
        let location = ObjectPath::parse(remote_key).map_err(|e| e.to_string())?;
        let result = self
            .store
            .get(&location)
            .await
            .map_err(|e| e.to_string())?;

        let file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| format!("create {}: {e}", dest.display()))?;

        match write_stream(file, result.into_stream(), dest).await {
            Ok(written) => Ok(written),
            Err(reason) => {
                discard_partial(dest).await;
                Err(reason)
            }
        }
    }
}

/// Drain `stream` into `file`. The handle is closed on return, success or not.
async fn write_stream<T, E>(
    mut file: tokio::fs::File,
    mut stream: impl Stream<Item = Result<T, E>> + Unpin,
    dest: &Path,
) -> Result<u64, String>
where
    T: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut written = 0_u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| e.to_string())?;
        let chunk = chunk.as_ref();
        file.write_all(chunk)
            .await
            .map_err(|e| format!("write {}: {e}", dest.display()))?;
        written += chunk.len() as u64;
    }
    file.flush()
        .await
        .map_err(|e| format!("flush {}: {e}", dest.display()))?;
    Ok(written)
}

/// Remove a partially written content file.
async fn discard_partial(dest: &Path) {
    if let Err(e) = tokio::fs::remove_file(dest).await
        && e.kind() != ErrorKind::NotFound
    {
        tracing::warn!(path = %dest.display(), error = %e, "could not remove partial content file");
    }
}

impl BlobFetch for ObjectStoreFetcher {
    async fn fetch(&self, key: &str, dest: &Path) -> FetchOutcome {
        let remote_key = self.remote_key(key);
        tracing::info!(key = %remote_key, "fetching content");
        match self.download(&remote_key, dest).await {
            Ok(bytes) => FetchOutcome::Fetched {
                key: remote_key,
                bytes,
            },
            Err(reason) => {
                tracing::warn!(key = %remote_key, %reason, "problem fetching content");
                FetchOutcome::Failed {
                    key: remote_key,
                    reason,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use object_store::PutPayload;
    use object_store::memory::InMemory;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    async fn store_with(key: &str, body: &'static [u8]) -> Arc<dyn ObjectStore> {
        let store = InMemory::new();
        store
            .put(&ObjectPath::parse(key).unwrap(), PutPayload::from_static(body))
            .await
            .unwrap();
        Arc::new(store)
    }

    #[test]
    fn remote_key_prefixes_namespace() {
        let fetcher = ObjectStoreFetcher::new(Arc::new(InMemory::new()), "UCDavis_Pathology");
        assert_eq!(
            fetcher.remote_key("S/E/1/img_1.svs"),
            "UCDavis_Pathology/S/E/1/img_1.svs"
        );
    }

    #[test]
    fn remote_key_handles_trailing_slash_and_empty_namespace() {
        let fetcher = ObjectStoreFetcher::new(Arc::new(InMemory::new()), "coll/");
        assert_eq!(fetcher.remote_key("k"), "coll/k");
        let bare = ObjectStoreFetcher::new(Arc::new(InMemory::new()), "");
        assert_eq!(bare.remote_key("k"), "k");
    }

    #[tokio::test]
    async fn fetch_copies_object_to_destination() {
        let store = store_with("coll/S/E/1/a.svs", b"slide-bytes").await;
        let fetcher = ObjectStoreFetcher::new(store, "coll");
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("a.svs");

        let outcome = fetcher.fetch("S/E/1/a.svs", &dest).await;

        assert_eq!(
            outcome,
            FetchOutcome::Fetched {
                key: "coll/S/E/1/a.svs".to_string(),
                bytes: 11
            }
        );
        assert_eq!(std::fs::read(&dest).unwrap(), b"slide-bytes");
    }

    #[tokio::test]
    async fn missing_object_is_reported_not_raised() {
        let fetcher = ObjectStoreFetcher::new(Arc::new(InMemory::new()), "coll");
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("missing.svs");

        let outcome = fetcher.fetch("S/E/1/missing.svs", &dest).await;

        assert!(!outcome.is_fetched());
        assert_eq!(outcome.key(), "coll/S/E/1/missing.svs");
        assert!(!dest.exists(), "no content file for a failed fetch");
    }

    #[tokio::test]
    async fn unwritable_destination_is_a_failed_outcome() {
        let store = store_with("coll/x.svs", b"data").await;
        let fetcher = ObjectStoreFetcher::new(store, "coll");
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("no-such-dir").join("x.svs");

        let outcome = fetcher.fetch("x.svs", &dest).await;
        assert!(matches!(outcome, FetchOutcome::Failed { .. }));
    }

    #[tokio::test]
    async fn stream_error_midway_removes_partial_file() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("partial.svs");
        let file = tokio::fs::File::create(&dest).await.unwrap();
        let chunks: Vec<Result<&[u8], String>> =
            vec![Ok(b"first-chunk".as_slice()), Err("connection reset".to_string())];

        let result = write_stream(file, futures_util::stream::iter(chunks), &dest).await;
        assert_eq!(result, Err("connection reset".to_string()));

        discard_partial(&dest).await;
        assert!(!dest.exists());
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn write_failure_leaves_no_content_file() {
        let store = store_with("coll/full.svs", b"bytes that cannot land").await;
        let fetcher = ObjectStoreFetcher::new(store, "coll");
        let dir = TempDir::new().unwrap();
        // Writes to /dev/full fail with ENOSPC once they reach the device.
        let dest = dir.path().join("full.svs");
        std::os::unix::fs::symlink("/dev/full", &dest).unwrap();

        let outcome = fetcher.fetch("full.svs", &dest).await;

        assert!(matches!(outcome, FetchOutcome::Failed { .. }));
        assert!(std::fs::symlink_metadata(&dest).is_err(), "content path removed");
        assert!(Path::new("/dev/full").exists());
    }

    #[tokio::test]
    async fn discarding_a_missing_file_is_quiet() {
        let dir = TempDir::new().unwrap();
        discard_partial(&dir.path().join("never-created.svs")).await;
    }

    #[test]
    fn s3_config_without_bucket_is_rejected() {
        let config = S3Config {
            bucket: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            ObjectStoreFetcher::from_s3_config(&config),
            Err(StoreError::NotConfigured(_))
        ));
    }

    #[test]
    fn s3_config_builds_store_with_explicit_settings() {
        let config = S3Config {
            region: "us-west-2".into(),
            access_key_id: "key".into(),
            secret_access_key: "secret".into(),
            endpoint: "http://localhost:9000".into(),
            allow_http: true,
            ..Default::default()
        };
        let fetcher = ObjectStoreFetcher::from_s3_config(&config).unwrap();
        assert_eq!(fetcher.remote_key("k"), "UCDavis_Pathology/k");
    }
}
