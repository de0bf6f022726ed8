use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The only file format tag this tooling reads and writes.
pub const FORMAT_VERSION: &str = "1";

/// One build variant: parameter key to opaque JSON value, in file order.
pub type ParameterSet = Map<String, Value>;

/// Named parameter sets, in file order.
pub type ParameterSets = IndexMap<String, ParameterSet>;

/// A parametric document as found on disk, with `project` and `scad`
/// already filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParametricDocument {
    #[serde(rename = "fileFormatVersion")]
    pub file_format_version: String,
    /// Project name, used as the prefix of every variant file.
    pub project: String,
    /// Path of the model source, relative to the document's directory.
    pub scad: String,
    #[serde(rename = "parameterSets")]
    pub parameter_sets: ParameterSets,
    /// Any other top-level fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParametricDocument {
    /// An empty document for `project` with the default model path.
    pub fn empty(project: impl Into<String>) -> Self {
        let project = project.into();
        Self {
            file_format_version: FORMAT_VERSION.to_string(),
            scad: default_scad(&project),
            project,
            parameter_sets: ParameterSets::new(),
            extra: Map::new(),
        }
    }

    /// Look up a parameter set by name.
    pub fn parameter_set(&self, name: &str) -> Option<&ParameterSet> {
        self.parameter_sets.get(name)
    }
}

/// Project name derived from a document path: the file name without its
/// extension (`models/bracket.json` -> `bracket`).
pub fn project_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Default model source for a project: `<project>.scad`.
pub fn default_scad(project: &str) -> String {
    format!("{project}.scad")
}
