use indexmap::{IndexMap, IndexSet};
use param_format::{values_equal, ParameterSet, ParametricDocument};
use serde_json::Value;

/// Which parameters of one project are shared by every variant and which
/// change between variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectAnalysis {
    pub project: String,
    /// Value of each key in the first set that defines it, in first-seen
    /// order.
    pub first_set_values: IndexMap<String, Value>,
    /// Keys whose value differs from `first_set_values` in some later set.
    pub variable_keys: IndexSet<String>,
}

impl ProjectAnalysis {
    /// Classify every key of `doc`.
    ///
    /// Sets are walked in document order and keys in set order. A key seen
    /// only once is constant.
    pub fn of(doc: &ParametricDocument) -> Self {
        let mut first_set_values: IndexMap<String, Value> = IndexMap::new();
        let mut variable_keys = IndexSet::new();

        for set in doc.parameter_sets.values() {
            for (key, value) in set {
                match first_set_values.get(key) {
                    None => {
                        first_set_values.insert(key.clone(), value.clone());
                    }
                    Some(baseline) if !values_equal(baseline, value) => {
                        variable_keys.insert(key.clone());
                    }
                    Some(_) => {}
                }
            }
        }

        Self {
            project: doc.project.clone(),
            first_set_values,
            variable_keys,
        }
    }

    pub fn is_variable(&self, key: &str) -> bool {
        self.variable_keys.contains(key)
    }

    /// Keys shared by all variants, with their value.
    pub fn common_parameters(&self) -> impl Iterator<Item = (&String, &Value)> + '_ {
        self.first_set_values
            .iter()
            .filter(|(key, _)| !self.is_variable(key))
    }

    /// The entries of `set` that vary across the project, in set order.
    pub fn variable_parameters<'a>(
        &'a self,
        set: &'a ParameterSet,
    ) -> impl Iterator<Item = (&'a String, &'a Value)> + 'a {
        set.iter().filter(|(key, _)| self.is_variable(key))
    }
}
