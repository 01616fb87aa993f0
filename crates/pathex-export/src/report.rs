//! Counters collected during one export run.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub studies: usize,
    pub experiments: usize,
    pub specimens: usize,
    /// Slides whose sidecar was written (content may still be missing).
    pub slides_exported: usize,
    /// Slides without an image record or image location.
    pub slides_skipped: usize,
    /// Exported slides whose content fetch failed.
    pub fetch_failures: usize,
}
