use std::path::Path;

use anyhow::Context;
use pathex_config::PathexConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PathexConfig> {
    dotenvy::dotenv().ok();

    match &flags.config {
        Some(path) => PathexConfig::load_from_file(Path::new(path))
            .with_context(|| format!("failed to load config file {path}")),
        None => PathexConfig::load().context("failed to load configuration"),
    }
}

pub async fn open_catalog(config: &PathexConfig) -> anyhow::Result<pathex_db::CatalogDb> {
    pathex_db::CatalogDb::open(&config.database)
        .await
        .context("failed to open catalog database")
}

pub fn open_content_store(
    config: &PathexConfig,
) -> anyhow::Result<pathex_store::ObjectStoreFetcher> {
    pathex_store::ObjectStoreFetcher::from_s3_config(&config.s3)
        .context("failed to configure content store")
}
