use crate::{Valuation, ValuationsIterator};
use std::fmt::{Display, Error, Formatter};
use std::mem::swap;
use std::ops::Index;

impl Valuation {
    /// Create a new valuation from a vector of values.
    pub fn new(values: Vec<bool>) -> Valuation {
        Valuation(values)
    }

    /// Create a valuation with all variables set to false.
    pub fn all_false(num_vars: usize) -> Valuation {
        Valuation(vec![false; num_vars])
    }

    /// Create a valuation with all variables set to true.
    pub fn all_true(num_vars: usize) -> Valuation {
        Valuation(vec![true; num_vars])
    }

    /// Get the value of the `index`-th variable in this valuation.
    pub fn value(&self, index: usize) -> bool {
        self.0[index]
    }

    pub fn values(&self) -> &[bool] {
        &self.0
    }

    /// Convert the valuation to its underlying vector.
    pub fn vector(self) -> Vec<bool> {
        self.0
    }

    /// Number of variables in this valuation (used mostly for consistency checks).
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// **(internal)** The valuation of the following truth table row, or `None` after
    /// the last row.
    ///
    /// The first value is the least significant bit of the row counter. Moving to the next
    /// row sets the lowest `false` value and clears every value below it.
    pub(crate) fn next(&self) -> Option<Valuation> {
        let lowest_false = self.0.iter().position(|value| !*value)?;
        let mut values = self.0.clone();
        values[..lowest_false].iter_mut().for_each(|value| *value = false);
        values[lowest_false] = true;
        Some(Valuation(values))
    }
}

/// Values are printed as `V` (true) and `F` (false), separated by tabs.
impl Display for Valuation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut values = self.0.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", symbol(*first))?;
            for value in values {
                write!(f, "\t{}", symbol(*value))?;
            }
        }
        Ok(())
    }
}

/// **(internal)** The truth value symbol used in printed tables.
pub(crate) fn symbol(value: bool) -> char {
    if value {
        'V'
    } else {
        'F'
    }
}

/// Allow indexing of `Valuation` using variable positions.
impl Index<usize> for Valuation {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl ValuationsIterator {
    /// Create a new iterator over all `2^num_vars` valuations.
    pub fn new(num_vars: usize) -> ValuationsIterator {
        ValuationsIterator {
            next_valuation: Some(Valuation::all_false(num_vars)),
        }
    }
}

impl Iterator for ValuationsIterator {
    type Item = Valuation;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(valuation) = &self.next_valuation {
            // Compute the next valuation and then swap it with the current value.
            let mut result = valuation.next();
            swap(&mut result, &mut self.next_valuation);
            result
        } else {
            None
        }
    }
}
