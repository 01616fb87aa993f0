//! # pathex-core
//!
//! Core types shared across all pathex crates:
//! - Scalar [`Value`]s and ordered [`Record`]s read from the catalog
//! - The fixed [`Level`] hierarchy (study → experiment → specimen → slide → image)
//! - Path-segment sanitization for directory and file names
//! - The two metadata encodings written next to exported data
//! - Cross-cutting error types

pub mod errors;
pub mod level;
pub mod metadata;
pub mod naming;
pub mod record;
pub mod value;

pub use errors::CoreError;
pub use level::Level;
pub use record::Record;
pub use value::Value;

/// Literal subfolder between the experiment and the file name in remote
/// content keys. The remote layout has no attribute that supplies it.
pub const CONTENT_VERSION_SEGMENT: &str = "1";
