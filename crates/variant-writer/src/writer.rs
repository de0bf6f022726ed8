use std::fmt;
use std::path::{Path, PathBuf};

use param_format::{
    load_or_default, save_document, single_set_document, FormatError, ParameterSets,
};
use tracing::{debug, info};

use crate::compare::first_difference;

/// Where variant files live, relative to the working directory.
pub const VARIANTS_DIR: &str = "out/variants";

/// Outcome of writing one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    /// The variant file was (re)written.
    Updated,
    /// The persisted variant already matched; nothing was written.
    Unchanged,
    /// The requested set is not in the document; nothing was touched.
    Missing,
}

impl WriteStatus {
    /// Operator-facing wording, as printed after the set name.
    pub fn as_str(self) -> &'static str {
        match self {
            WriteStatus::Updated => "updated",
            WriteStatus::Unchanged => "no change",
            WriteStatus::Missing => "does not exist",
        }
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes single-set variant files into one directory.
///
/// The directory must already exist.
#[derive(Debug, Clone)]
pub struct VariantWriter {
    variants_dir: PathBuf,
}

impl Default for VariantWriter {
    fn default() -> Self {
        Self::new(Path::new(".").join(VARIANTS_DIR))
    }
}

impl VariantWriter {
    /// A writer targeting `variants_dir`.
    pub fn new(variants_dir: impl Into<PathBuf>) -> Self {
        Self {
            variants_dir: variants_dir.into(),
        }
    }

    pub fn variants_dir(&self) -> &Path {
        &self.variants_dir
    }

    /// Path of the variant file for `project` and `set_name`:
    /// `<dir>/<project>.<set_name>.json`.
    pub fn variant_path(&self, project: &str, set_name: &str) -> PathBuf {
        self.variants_dir.join(format!("{project}.{set_name}.json"))
    }

    /// Persist the set `set_name` of `parameter_sets` if it changed since the
    /// last write, or unconditionally when `force` is set.
    pub fn write_single(
        &self,
        parameter_sets: &ParameterSets,
        project: &str,
        set_name: &str,
        force: bool,
    ) -> Result<WriteStatus, FormatError> {
        let Some(set) = parameter_sets.get(set_name) else {
            debug!(project, set = set_name, "parameter set not found");
            return Ok(WriteStatus::Missing);
        };

        let path = self.variant_path(project, set_name);
        let previous = load_or_default(&path)?;

        let mut candidate = ParameterSets::new();
        candidate.insert(set_name.to_string(), set.clone());

        let difference = first_difference(&candidate, &previous.parameter_sets);
        if !force && difference.is_none() {
            return Ok(WriteStatus::Unchanged);
        }

        save_document(&path, &single_set_document(set_name, set))?;
        info!(path = %path.display(), force, ?difference, "variant written");
        Ok(WriteStatus::Updated)
    }

    /// Run [`write_single`](Self::write_single) for every set, in document
    /// order, reporting each outcome to `on_status` as soon as it is known.
    ///
    /// Stops at the first failed write; sets before it have already been
    /// reported.
    pub fn write_all(
        &self,
        parameter_sets: &ParameterSets,
        project: &str,
        force: bool,
        mut on_status: impl FnMut(&str, WriteStatus),
    ) -> Result<(), FormatError> {
        for set_name in parameter_sets.keys() {
            let status = self.write_single(parameter_sets, project, set_name, force)?;
            on_status(set_name, status);
        }
        Ok(())
    }
}
