use std::io;
use std::path::PathBuf;

/// Errors while reading or writing parametric documents.
///
/// A missing or unreadable document is not an error: loading falls back to
/// an empty default document instead.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("failed to parse {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
