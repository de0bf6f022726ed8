//! Shared plumbing for the `param-variants` and `param-html` binaries.

use std::path::Path;
use std::str::FromStr;

use param_format::{load_or_default, FormatError, ParametricDocument};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging to stderr.
///
/// `RUST_LOG` overrides the default filter of `warn`. Stdout is left to the
/// status lines and target lists that build scripts read.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// A document path with an optional project override: `path[:project]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub path: String,
    pub project: Option<String>,
}

impl FromStr for InputSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, project) = match s.split_once(':') {
            Some((path, project)) => (path, Some(project.to_string())),
            None => (s, None),
        };
        if path.is_empty() {
            return Err(format!("missing document path in '{s}'"));
        }
        Ok(Self {
            path: path.to_string(),
            project,
        })
    }
}

impl InputSpec {
    /// Load the document, applying the project override if one was given.
    pub fn load(&self) -> Result<ParametricDocument, FormatError> {
        let mut doc = load_or_default(Path::new(&self.path))?;
        if let Some(project) = &self.project {
            doc.project = project.clone();
        }
        Ok(doc)
    }
}
