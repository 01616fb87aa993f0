use std::path::PathBuf;

use anyhow::Context;
use pathex_config::PathexConfig;
use pathex_export::HierarchyWalker;

use crate::bootstrap;
use crate::cli::{ExportArgs, GlobalFlags};
use crate::output;

/// Handle `pathex export`.
pub async fn handle(
    args: &ExportArgs,
    config: &PathexConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let base_dir = args
        .base_dir
        .as_ref()
        .map_or_else(|| config.export.base_dir.clone(), PathBuf::from);

    let catalog = bootstrap::open_catalog(config).await?;
    let fetcher = bootstrap::open_content_store(config)?;

    tracing::info!(study = %args.study, base_dir = %base_dir.display(), "starting export");
    let report = HierarchyWalker::new(&catalog, &fetcher)
        .export_study(&base_dir, &args.study)
        .await
        .with_context(|| format!("export of study '{}' failed", args.study))?;

    tracing::info!(
        studies = report.studies,
        experiments = report.experiments,
        specimens = report.specimens,
        slides = report.slides_exported,
        skipped = report.slides_skipped,
        fetch_failures = report.fetch_failures,
        "export finished"
    );

    output::emit(
        flags.format,
        &report,
        &[format!(
            "{} slides exported, {} skipped, {} fetch failures",
            report.slides_exported, report.slides_skipped, report.fetch_failures
        )],
    )
}
