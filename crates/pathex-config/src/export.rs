//! Export output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_base_dir() -> PathBuf {
    PathBuf::from("/efs/labcas/mcl/archive")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Root directory under which study trees are written.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ExportConfig::default();
        assert_eq!(config.base_dir, PathBuf::from("/efs/labcas/mcl/archive"));
    }
}
