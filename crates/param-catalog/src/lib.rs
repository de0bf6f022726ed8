pub mod analysis;
pub mod errors;
pub mod html;
pub mod title;

use std::fs;
use std::path::Path;

use param_format::ParametricDocument;
use tracing::info;

pub use analysis::ProjectAnalysis;
pub use errors::CatalogError;
pub use html::{display_value, render_catalog};
pub use title::variable_name_to_title;

/// Render the page for `documents` and write it to `path`, replacing any
/// previous page.
pub fn write_catalog(
    documents: &[ParametricDocument],
    path: impl AsRef<Path>,
) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let html = render_catalog(documents);
    fs::write(path, &html).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        projects = documents.len(),
        bytes = html.len(),
        "catalog written"
    );
    Ok(())
}
