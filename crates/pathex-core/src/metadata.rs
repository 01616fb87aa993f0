//! Metadata encodings written alongside exported data.
//!
//! Two independent formats:
//!
//! - **Descriptor** (`<dir>/<dir name>.cfg`): one `key=value` line per
//!   attribute of a directory's record. Values are not escaped, so a value
//!   containing `=` or a newline produces an ambiguous file.
//! - **Sidecar** (`<file>.xmlmet`): an XML-like fragment with one `keyval`
//!   entry per attribute of a leaf record. Fragments are appended, never
//!   rewritten, by the export layer.

use crate::record::Record;

/// Extension of per-directory descriptors.
pub const DESCRIPTOR_EXTENSION: &str = "cfg";

/// Extension appended to a leaf file name for its sidecar.
pub const SIDECAR_EXTENSION: &str = "xmlmet";

/// Opening line of every sidecar fragment.
pub const SIDECAR_OPEN: &str = "<cas:metadata xmlns:cas=\"http://oodt.jpl.nasa.gov/1.0/cas\">\n";

/// Marker ending every sidecar fragment.
///
/// Downstream ingest expects this exact string, which repeats the opening
/// element name rather than closing it.
pub const SIDECAR_CLOSE: &str = "<cas:metadata>";

/// Namespace prefix of every sidecar key.
pub const SIDECAR_KEY_PREFIX: &str = "_File_labcas.pathology:";

/// Encode a record as descriptor lines, in record order.
#[must_use]
pub fn render_descriptor(record: &Record) -> String {
    let mut out = String::new();
    for (key, value) in record.iter() {
        out.push_str(key);
        out.push('=');
        out.push_str(&value.render());
        out.push('\n');
    }
    out
}

/// Encode a leaf record as one complete sidecar fragment.
#[must_use]
pub fn render_sidecar(record: &Record) -> String {
    let mut out = String::from(SIDECAR_OPEN);
    for (key, value) in record.iter() {
        out.push_str("<keyval type=\"vector\"><key>");
        out.push_str(SIDECAR_KEY_PREFIX);
        out.push_str(key);
        out.push_str("</key><val>");
        out.push_str(&value.render());
        out.push_str("</val></keyval>\n");
    }
    out.push_str(SIDECAR_CLOSE);
    out
}
