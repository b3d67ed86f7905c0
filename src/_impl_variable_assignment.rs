use crate::{Valuation, VariableAssignment};
use std::collections::HashMap;
use std::iter::FromIterator;

impl VariableAssignment {
    /// Create an empty assignment.
    pub fn new() -> VariableAssignment {
        VariableAssignment(HashMap::default())
    }

    /// Build the assignment of one truth table row: the variable `names[j]` receives
    /// the `j`-th value of the `valuation`.
    ///
    /// *Panics:* With `shields_up` enabled, `names` and `valuation` must have the same length.
    pub fn from_valuation(names: &[String], valuation: &Valuation) -> VariableAssignment {
        if cfg!(feature = "shields_up") && names.len() != valuation.num_vars() {
            panic!(
                "Table has {} variables, but valuation has {}.",
                names.len(),
                valuation.num_vars()
            )
        }
        names
            .iter()
            .cloned()
            .zip(valuation.values().iter().cloned())
            .collect()
    }

    /// Assign `value` to the variable `name`, returning the previous value (if any).
    pub fn set(&mut self, name: &str, value: bool) -> Option<bool> {
        self.0.insert(name.to_string(), value)
    }

    /// Value of the variable `name`, or `None` if the variable is not assigned.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for VariableAssignment {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        VariableAssignment(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}
