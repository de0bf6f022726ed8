use std::fmt;
use std::path::{Component, Path, PathBuf};

use param_format::ParametricDocument;

/// One build target: a variant plus where its document and model live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTarget {
    pub project: String,
    pub set_name: String,
    /// The document path exactly as given on the command line.
    pub document_path: String,
    pub scad_path: PathBuf,
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.project,
            self.set_name,
            self.document_path,
            self.scad_path.display()
        )
    }
}

/// Build targets for every named set of `doc`, in document order.
///
/// Sets with an empty name are skipped.
pub fn build_targets(doc: &ParametricDocument, document_path: &str) -> Vec<BuildTarget> {
    let scad_path = resolve_scad(Path::new(document_path), &doc.scad);
    doc.parameter_sets
        .keys()
        .filter(|name| !name.is_empty())
        .map(|name| BuildTarget {
            project: doc.project.clone(),
            set_name: name.clone(),
            document_path: document_path.to_string(),
            scad_path: scad_path.clone(),
        })
        .collect()
}

/// Join targets with single spaces, the form build scripts consume.
pub fn format_targets(targets: &[BuildTarget]) -> String {
    targets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a model path given relative to the document's directory.
pub fn resolve_scad(document_path: &Path, scad: &str) -> PathBuf {
    normalize_lexically(&document_path.join("..").join(scad))
}

/// Fold `.` and `..` components without touching the filesystem.
///
/// Leading `..` of a relative path are kept; `..` directly under the root
/// stays at the root. An empty result becomes `.`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
