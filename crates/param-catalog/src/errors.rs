use std::io;
use std::path::PathBuf;

/// Errors while producing the download page.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to write catalog {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
