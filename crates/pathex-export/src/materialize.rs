//! Directory and metadata file writers.
//!
//! Descriptors are rewritten on every run; sidecars are appended to, so an
//! export repeated over the same tree accumulates one fragment per run.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use pathex_core::Record;
use pathex_core::metadata::{
    DESCRIPTOR_EXTENSION, SIDECAR_EXTENSION, render_descriptor, render_sidecar,
};

use crate::error::ExportError;

/// Create `dir` and any missing parents. Existing directories are fine.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the directory cannot be created.
pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))
}

/// `<dir>/<last segment of dir>.cfg`
#[must_use]
pub fn descriptor_path(dir: &Path) -> PathBuf {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(format!("{name}.{DESCRIPTOR_EXTENSION}"))
}

/// `<leaf>.xmlmet`, keeping the leaf's own extension.
#[must_use]
pub fn sidecar_path(leaf: &Path) -> PathBuf {
    let mut path = leaf.as_os_str().to_owned();
    path.push(".");
    path.push(SIDECAR_EXTENSION);
    PathBuf::from(path)
}

/// Write the descriptor for `dir`, replacing any previous one.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be written.
pub fn write_descriptor(dir: &Path, record: &Record) -> Result<PathBuf, ExportError> {
    let path = descriptor_path(dir);
    fs::write(&path, render_descriptor(record)).map_err(|e| ExportError::io(&path, e))?;
    Ok(path)
}

/// Append one sidecar fragment for `leaf`, creating the file if needed.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be opened or written.
pub fn append_sidecar(leaf: &Path, record: &Record) -> Result<PathBuf, ExportError> {
    let path = sidecar_path(leaf);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| ExportError::io(&path, e))?;
    file.write_all(render_sidecar(record).as_bytes())
        .map_err(|e| ExportError::io(&path, e))?;
    Ok(path)
}

/// Directory plus descriptor for one hierarchy node.
///
/// # Errors
///
/// Returns [`ExportError::Io`] on any filesystem failure.
pub fn materialize_node(dir: &Path, record: &Record) -> Result<(), ExportError> {
    ensure_directory(dir)?;
    write_descriptor(dir, record)?;
    Ok(())
}
