//! Depth-first walk of the catalog hierarchy into a directory tree.
//!
//! ```text
//! <base>/<study>/<experiment>/<specimen>/<leaf file>
//!                                       /<leaf file>.xmlmet
//! ```
//!
//! Study, experiment and specimen rows each get a directory and a
//! descriptor. Slides get no directory: each slide's image content and
//! sidecar land in the specimen directory. One level's result set is fully
//! read before any child is queried, and every step completes before the
//! next begins.

use std::path::Path;

use pathex_core::level::ID_COLUMN;
use pathex_core::naming::{leaf_file_name, sanitize};
use pathex_core::{CONTENT_VERSION_SEGMENT, Level, Record, Value};
use pathex_db::{CatalogQuery, TabularSource};
use pathex_store::BlobFetch;
use tracing::{debug, info, warn};

use crate::error::ExportError;
use crate::materialize::{append_sidecar, materialize_node};
use crate::report::ExportReport;

/// Sanitized names of the study and experiment a specimen belongs to.
/// Remote content keys are built from them.
struct Lineage<'n> {
    study: &'n str,
    experiment: &'n str,
}

/// Drives one export over injected catalog and content clients.
pub struct HierarchyWalker<'a, Q, B> {
    source: &'a Q,
    fetcher: &'a B,
}

impl<'a, Q: TabularSource, B: BlobFetch> HierarchyWalker<'a, Q, B> {
    pub const fn new(source: &'a Q, fetcher: &'a B) -> Self {
        Self { source, fetcher }
    }

    /// Export every study whose name equals `study_name` under `base_dir`.
    ///
    /// # Errors
    ///
    /// Catalog failures, records without ids or display names, and metadata
    /// write failures abort the run. Files written before the failure stay.
    pub async fn export_study(
        &self,
        base_dir: &Path,
        study_name: &str,
    ) -> Result<ExportReport, ExportError> {
        let mut report = ExportReport::default();
        let studies = self.records(CatalogQuery::study_by_name(study_name)).await?;
        if studies.is_empty() {
            warn!(study = study_name, "no matching study");
        }

        for study in &studies {
            let name = segment(Level::Study, study)?;
            info!(study = %name, "study");
            let dir = base_dir.join(&name);
            materialize_node(&dir, study)?;
            report.studies += 1;

            let experiments = self
                .records(CatalogQuery::children_of(Level::Experiment, id_of(study)?))
                .await?;
            for experiment in &experiments {
                self.export_experiment(&dir, &name, experiment, &mut report)
                    .await?;
            }
        }
        Ok(report)
    }

    async fn export_experiment(
        &self,
        study_dir: &Path,
        study: &str,
        experiment: &Record,
        report: &mut ExportReport,
    ) -> Result<(), ExportError> {
        let name = segment(Level::Experiment, experiment)?;
        info!(experiment = %name, "--experiment");
        let dir = study_dir.join(&name);
        materialize_node(&dir, experiment)?;
        report.experiments += 1;

        let lineage = Lineage {
            study,
            experiment: &name,
        };
        let specimens = self
            .records(CatalogQuery::children_of(Level::Specimen, id_of(experiment)?))
            .await?;
        for specimen in &specimens {
            self.export_specimen(&dir, &lineage, specimen, report).await?;
        }
        Ok(())
    }

    async fn export_specimen(
        &self,
        experiment_dir: &Path,
        lineage: &Lineage<'_>,
        specimen: &Record,
        report: &mut ExportReport,
    ) -> Result<(), ExportError> {
        let name = segment(Level::Specimen, specimen)?;
        info!(specimen = %name, "----specimen");
        let dir = experiment_dir.join(&name);
        materialize_node(&dir, specimen)?;
        report.specimens += 1;

        let slides = self
            .records(CatalogQuery::children_of(Level::Slide, id_of(specimen)?))
            .await?;
        for slide in &slides {
            self.export_slide(&dir, lineage, slide, report).await?;
        }
        Ok(())
    }

    /// Fetch content and append the sidecar for one slide.
    ///
    /// A slide without an image record (or whose image has no location) is
    /// skipped. A failed fetch still writes the sidecar.
    async fn export_slide(
        &self,
        specimen_dir: &Path,
        lineage: &Lineage<'_>,
        slide: &Record,
        report: &mut ExportReport,
    ) -> Result<(), ExportError> {
        let slide_id = id_of(slide)?;
        info!(slide = %slide_id, "------slide");

        let mut images = self
            .records(CatalogQuery::children_of(Level::Image, slide_id))
            .await?;
        if images.len() > 1 {
            debug!(count = images.len(), "slide has several images; using the first");
        }
        if images.is_empty() {
            warn!("--------no image metadata found!");
            report.slides_skipped += 1;
            return Ok(());
        }
        let image = images.swap_remove(0);

        let Some(file_name) = leaf_name(&image) else {
            warn!("--------image has no file location; skipping slide");
            report.slides_skipped += 1;
            return Ok(());
        };
        let leaf = specimen_dir.join(&file_name);

        let key = format!(
            "{}/{}/{CONTENT_VERSION_SEGMENT}/{file_name}",
            lineage.study, lineage.experiment
        );
        if !self.fetcher.fetch(&key, &leaf).await.is_fetched() {
            report.fetch_failures += 1;
        }

        append_sidecar(&leaf, &Record::merged(slide, &image))?;
        report.slides_exported += 1;
        Ok(())
    }

    async fn records(&self, query: CatalogQuery) -> Result<Vec<Record>, ExportError> {
        let set = self.source.execute(&query).await?;
        debug!(level = %query.level(), rows = set.rows.len(), "fetched rows");
        Ok(set.into_records())
    }
}

fn id_of(record: &Record) -> Result<Value, ExportError> {
    Ok(record.require(ID_COLUMN)?.clone())
}

/// Sanitized directory name for a study, experiment or specimen record.
fn segment(level: Level, record: &Record) -> Result<String, ExportError> {
    let column = level.display_column().unwrap_or(ID_COLUMN);
    let name = record.require(column).map(|value| sanitize(&value.render()));
    match name {
        Ok(name) if !name.is_empty() => Ok(name),
        _ => Err(ExportError::MissingDisplayName { level, column }),
    }
}

/// Sanitized leaf file name from an image record, if it has a usable location.
fn leaf_name(image: &Record) -> Option<String> {
    let column = Level::Image.display_column()?;
    let location = image.require(column).ok()?.render();
    let name = leaf_file_name(&location);
    (!name.is_empty()).then_some(name)
}
