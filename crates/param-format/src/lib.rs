pub mod document;
pub mod errors;
pub mod load;
pub mod save;
pub mod value;

pub use document::{
    default_scad, project_name_for, ParameterSet, ParameterSets, ParametricDocument,
    FORMAT_VERSION,
};
pub use errors::FormatError;
pub use load::{load_or_default, parse_document};
pub use save::{save_document, single_set_document, sort_keys, to_canonical_json};
pub use value::values_equal;
