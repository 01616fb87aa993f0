//! Catalog database configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local file path, `:memory:`, or a remote `libsql://` / `https://` URL.
    #[serde(default)]
    pub url: String,

    /// Auth token for remote databases. Ignored for local files.
    #[serde(default)]
    pub auth_token: String,
}

impl DatabaseConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }

    /// Whether the URL points at a remote server rather than a local file.
    pub fn is_remote(&self) -> bool {
        ["libsql://", "https://", "http://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }

    /// Check the section is usable for opening a connection.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] without a URL, and
    /// [`ConfigError::InvalidValue`] for a remote URL without a token.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "database".to_string(),
            });
        }
        if self.is_remote() && self.auth_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.auth_token".to_string(),
                reason: "remote databases require an auth token".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = DatabaseConfig::default();
        assert!(!config.is_configured());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn local_path_needs_no_token() {
        let config = DatabaseConfig {
            url: "./catalog.db".into(),
            auth_token: String::new(),
        };
        assert!(!config.is_remote());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn remote_url_requires_token() {
        let mut config = DatabaseConfig {
            url: "libsql://catalog-lab.turso.io".into(),
            auth_token: String::new(),
        };
        assert!(config.is_remote());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        config.auth_token = "token".into();
        assert!(config.validate().is_ok());
    }
}
