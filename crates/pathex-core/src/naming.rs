//! Path-segment naming rules.
//!
//! Directory and file names in an export tree are derived from display
//! attributes with a fixed two-step substitution. Existing archives depend on
//! these names byte-for-byte, so no other normalization is applied.

/// Turn a display string into a path segment.
///
/// Spaces become underscores, then every `-_` becomes `-`. The second step is
/// a single left-to-right pass, so `"a-  b"` becomes `"a-_b"`, not `"a-b"`.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.replace(' ', "_").replace("-_", "-")
}

/// Final component of a Windows-style file location, before sanitizing.
///
/// Locations without a backslash are returned whole.
#[must_use]
pub fn file_basename(location: &str) -> &str {
    location.rsplit('\\').next().unwrap_or(location)
}

/// Sanitized file name for an image's stored location.
#[must_use]
pub fn leaf_file_name(location: &str) -> String {
    sanitize(file_basename(location))
}
