//! Change-detecting writer for per-variant parameter files.
//!
//! A master document holds many named parameter sets. Each set is persisted
//! on its own as `out/variants/<project>.<set>.json` for the model build, and
//! rewritten only when its values changed, so file timestamps stay useful to
//! the build tool.

pub mod compare;
pub mod targets;
pub mod writer;

pub use compare::{differs, first_difference, Difference};
pub use targets::{build_targets, format_targets, resolve_scad, BuildTarget};
pub use writer::{VariantWriter, WriteStatus, VARIANTS_DIR};
