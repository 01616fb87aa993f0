//! S3 object store configuration for slide content.

use serde::{Deserialize, Serialize};

/// Default bucket holding slide content.
fn default_bucket() -> String {
    String::from("nlstc-data")
}

/// Default collection namespace prepended to every content key.
fn default_namespace() -> String {
    String::from("UCDavis_Pathology")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Config {
    /// Bucket name.
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// AWS region. Empty defers to `AWS_REGION` / `AWS_DEFAULT_REGION`.
    #[serde(default)]
    pub region: String,

    /// Access key ID. Empty defers to `AWS_ACCESS_KEY_ID`.
    #[serde(default)]
    pub access_key_id: String,

    /// Secret access key. Empty defers to `AWS_SECRET_ACCESS_KEY`.
    #[serde(default)]
    pub secret_access_key: String,

    /// Custom endpoint URL (e.g. MinIO). Empty uses AWS.
    #[serde(default)]
    pub endpoint: String,

    /// Allow plain-HTTP endpoints.
    #[serde(default)]
    pub allow_http: bool,

    /// Collection namespace prepended to every content key.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            region: String::new(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            endpoint: String::new(),
            allow_http: false,
            namespace: default_namespace(),
        }
    }
}

impl S3Config {
    /// Whether explicit credentials are set. Without them the store falls
    /// back to the standard AWS environment and instance credentials.
    pub fn has_explicit_credentials(&self) -> bool {
        !self.access_key_id.is_empty() && !self.secret_access_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_pathology_collection() {
        let config = S3Config::default();
        assert_eq!(config.bucket, "nlstc-data");
        assert_eq!(config.namespace, "UCDavis_Pathology");
        assert!(!config.has_explicit_credentials());
        assert!(!config.allow_http);
    }
}
