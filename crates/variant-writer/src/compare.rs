use param_format::{values_equal, ParameterSets};

/// The first reason a new parameter set counts as changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Difference {
    /// No set with this name was persisted before.
    NewSet { set: String },
    /// The persisted set has no value for this key.
    NewKey { set: String, key: String },
    /// The persisted value for this key is different.
    ChangedValue { set: String, key: String },
}

/// Find the first difference between `new_sets` and the persisted
/// `old_sets`.
///
/// Sets and keys are visited in the insertion order of `new_sets` and the
/// search stops at the first hit. Only keys present in the new set are
/// checked: a key that exists in the old set but was removed from the new
/// one is not a difference.
pub fn first_difference(new_sets: &ParameterSets, old_sets: &ParameterSets) -> Option<Difference> {
    for (set_name, new_set) in new_sets {
        let Some(old_set) = old_sets.get(set_name) else {
            return Some(Difference::NewSet {
                set: set_name.clone(),
            });
        };
        for (key, new_value) in new_set {
            match old_set.get(key) {
                None => {
                    return Some(Difference::NewKey {
                        set: set_name.clone(),
                        key: key.clone(),
                    })
                }
                Some(old_value) if !values_equal(new_value, old_value) => {
                    return Some(Difference::ChangedValue {
                        set: set_name.clone(),
                        key: key.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }
    None
}

/// Whether `new_sets` would change anything persisted in `old_sets`.
pub fn differs(new_sets: &ParameterSets, old_sets: &ParameterSets) -> bool {
    first_difference(new_sets, old_sets).is_some()
}
