//! # pathex-export
//!
//! Materializes one study of the pathology catalog as a self-describing
//! directory archive: a directory plus `.cfg` descriptor per study,
//! experiment and specimen, and per slide the fetched image content with an
//! appended `.xmlmet` sidecar.
//!
//! The catalog and the content store are injected as [`TabularSource`] and
//! [`BlobFetch`] implementations.
//!
//! [`TabularSource`]: pathex_db::TabularSource
//! [`BlobFetch`]: pathex_store::BlobFetch

pub mod error;
pub mod materialize;
pub mod report;
mod test_support;
pub mod walker;

pub use error::ExportError;
pub use report::ExportReport;
pub use walker::HierarchyWalker;
