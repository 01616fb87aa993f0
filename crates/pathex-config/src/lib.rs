//! # pathex-config
//!
//! Layered configuration loading for pathex using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PATHEX_*` prefix, `__` as separator)
//! 2. Project-level `.pathex/config.toml`
//! 3. User-level `~/.config/pathex/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PATHEX_DATABASE__URL` -> `database.url`,
//! `PATHEX_S3__BUCKET` -> `s3.bucket`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use pathex_config::PathexConfig;
//!
//! let config = PathexConfig::load_with_dotenv().expect("config");
//! if config.database.is_configured() {
//!     println!("catalog: {}", config.database.url);
//! }
//! ```

mod database;
mod error;
mod export;
mod s3;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use export::ExportConfig;
pub use s3::S3Config;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the project-local config directory.
pub const PROJECT_DIR: &str = ".pathex";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PathexConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub s3: S3Config,
    #[serde(default)]
    pub export: ExportConfig,
}

impl PathexConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an extra TOML file layered above the project
    /// file and below the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the file does not exist, and
    /// [`ConfigError::Figment`] if a source is malformed.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::InvalidValue {
                field: "config".to_string(),
                reason: format!("file not found: {}", path.display()),
            });
        }
        Self::base_figment()
            .merge(Toml::file(path))
            .merge(Self::env_provider())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers.
    pub fn figment() -> Figment {
        Self::base_figment().merge(Self::env_provider())
    }

    /// Defaults plus the user-global and project-local TOML files.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("PATHEX_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pathex").join("config.toml"))
    }
}
