use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::document::{ParameterSet, FORMAT_VERSION};
use crate::errors::FormatError;

/// Indentation used for every file this tooling writes.
const INDENT: &[u8] = b"    ";

/// Return a copy of `value` with object keys sorted at every depth.
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.clone(), sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

/// Serialize `value` with sorted keys and four-space indentation.
///
/// The same content always produces the same bytes, whatever order its keys
/// were inserted in. No trailing newline is written.
pub fn to_canonical_json(value: &Value) -> Result<String, FormatError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    sort_keys(value).serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// The persisted form of a single variant:
/// `{"fileFormatVersion": "1", "parameterSets": {<set_name>: <set>}}`.
pub fn single_set_document(set_name: &str, set: &ParameterSet) -> Value {
    let mut sets = Map::new();
    sets.insert(set_name.to_string(), Value::Object(set.clone()));

    let mut doc = Map::new();
    doc.insert(
        "fileFormatVersion".to_string(),
        Value::String(FORMAT_VERSION.to_string()),
    );
    doc.insert("parameterSets".to_string(), Value::Object(sets));
    Value::Object(doc)
}

/// Write `value` to `path` in canonical form, replacing any existing file.
///
/// Parent directories are not created.
pub fn save_document(path: impl AsRef<Path>, value: &Value) -> Result<(), FormatError> {
    let path = path.as_ref();
    let text = to_canonical_json(value)?;
    fs::write(path, text).map_err(|source| FormatError::Write {
        path: path.to_path_buf(),
        source,
    })
}
