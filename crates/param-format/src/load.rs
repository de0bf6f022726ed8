use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::document::{
    default_scad, project_name_for, ParameterSets, ParametricDocument, FORMAT_VERSION,
};
use crate::errors::FormatError;

/// The document as written by hand, before defaults are applied.
#[derive(Debug, Deserialize)]
struct ParametricDocumentRaw {
    #[serde(rename = "fileFormatVersion")]
    file_format_version: Option<Value>,
    project: Option<Value>,
    scad: Option<Value>,
    #[serde(rename = "parameterSets", default)]
    parameter_sets: ParameterSets,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// Parse a document from JSON bytes.
///
/// `path` only supplies the fallback project name (its file stem) and the
/// path reported in errors; nothing is read from it.
pub fn parse_document(bytes: &[u8], path: &Path) -> Result<ParametricDocument, FormatError> {
    let raw: ParametricDocumentRaw =
        serde_json::from_slice(bytes).map_err(|source| FormatError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let file_format_version =
        text_field(raw.file_format_version).unwrap_or_else(|| FORMAT_VERSION.to_string());
    if file_format_version != FORMAT_VERSION {
        warn!(
            path = %path.display(),
            version = %file_format_version,
            "unexpected fileFormatVersion"
        );
    }

    let project = text_field(raw.project).unwrap_or_else(|| project_name_for(path));
    let scad = text_field(raw.scad).unwrap_or_else(|| default_scad(&project));

    Ok(ParametricDocument {
        file_format_version,
        project,
        scad,
        parameter_sets: raw.parameter_sets,
        extra: raw.extra,
    })
}

/// A top-level text field. Strings are taken as-is, other values as their
/// JSON text; `null` counts as absent.
fn text_field(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Load the document at `path`, or an empty default when it cannot be read.
///
/// A file that exists but does not parse is an error and is never replaced
/// by the default.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ParametricDocument, FormatError> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => parse_document(&bytes, path),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "document not readable, using empty default");
            Ok(ParametricDocument::empty(project_name_for(path)))
        }
    }
}
