use crate::_impl_valuation::symbol;
use crate::logging::targets;
use crate::{
    EvalError, TokenSequence, TruthTable, TruthTableError, TruthTableRow, TruthTableHeader,
    TruthTableRows, Valuation, ValuationsIterator, VariableAssignment, LARGE_TABLE_THRESHOLD,
};
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl TruthTable {
    /// Prepare a truth table for the given expression. Unbalanced parentheses are
    /// reported as `TruthTableError::Conversion`.
    pub fn new(expression: &str) -> Result<TruthTable, TruthTableError> {
        let infix = Self::tokenize_non_empty(expression)?;
        let postfix = infix.try_to_postfix()?;
        Ok(Self::from_parts(expression, &infix, postfix))
    }

    /// Same as `TruthTable::new`, but unbalanced parentheses are tolerated.
    pub fn new_lenient(expression: &str) -> Result<TruthTable, TruthTableError> {
        let infix = Self::tokenize_non_empty(expression)?;
        let postfix = infix.to_postfix();
        Ok(Self::from_parts(expression, &infix, postfix))
    }

    /// **(internal)** Run the lexer and reject expressions without any tokens.
    fn tokenize_non_empty(expression: &str) -> Result<TokenSequence, TruthTableError> {
        let infix = TokenSequence::tokenize(expression)?;
        if infix.is_empty() {
            return Err(TruthTableError::EmptyExpression);
        }
        Ok(infix)
    }

    /// **(internal)** Build the table once the postfix sequence is known.
    fn from_parts(expression: &str, infix: &TokenSequence, postfix: TokenSequence) -> TruthTable {
        let variables = infix.variables();
        log::debug!(
            target: targets::TABLE,
            "Expression `{}` has {} variables, postfix form `{}`.",
            expression,
            variables.len(),
            postfix
        );
        TruthTable {
            expression: expression.to_string(),
            variables,
            postfix,
        }
    }

    /// The expression string this table was built from.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Distinct variables of the expression in ascending lexicographic order. This is also
    /// the order of values in every row `Valuation`.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// The postfix form of the expression.
    pub fn postfix(&self) -> &TokenSequence {
        &self.postfix
    }

    /// Number of rows of this table, i.e. `2^n`. Returns `None` if the number does not
    /// fit into `u128`.
    pub fn row_count(&self) -> Option<u128> {
        u32::try_from(self.num_vars())
            .ok()
            .and_then(|n| 1u128.checked_shl(n))
    }

    /// True if the table has more than `LARGE_TABLE_THRESHOLD` variables.
    pub fn is_large(&self) -> bool {
        self.num_vars() > LARGE_TABLE_THRESHOLD
    }

    /// Evaluate the expression in one `Valuation` of the table variables.
    ///
    /// *Panics:* With `shields_up` enabled, the valuation must have exactly `num_vars` values.
    pub fn eval_row(&self, valuation: &Valuation) -> Result<bool, EvalError> {
        let assignment = VariableAssignment::from_valuation(&self.variables, valuation);
        self.postfix.eval_postfix(&assignment)
    }

    /// Iterate over all rows of this table in the order of an increasing binary counter
    /// (the first variable is the least significant bit).
    ///
    /// Be aware of the exponential number of iterations!
    pub fn rows(&self) -> TruthTableRows<'_> {
        if self.is_large() {
            log::debug!(
                target: targets::TABLE,
                "Enumerating a table with {} variables.",
                self.num_vars()
            );
        }
        TruthTableRows {
            table: self,
            valuations: ValuationsIterator::new(self.num_vars()),
        }
    }

    /// The table header: variable names separated by tabs, followed by the result column
    /// and a separator line. Implements `Display`, so it can be written to any output.
    pub fn header(&self) -> TruthTableHeader<'_> {
        TruthTableHeader { table: self }
    }
}

impl TryFrom<&str> for TruthTable {
    type Error = TruthTableError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TruthTable::new(value)
    }
}

impl<'a> Iterator for TruthTableRows<'a> {
    type Item = TruthTableRow;

    fn next(&mut self) -> Option<Self::Item> {
        let valuation = self.valuations.next()?;
        let result = self.table.eval_row(&valuation);
        if let Err(error) = &result {
            log::debug!(target: targets::TABLE, "Row [{}] failed: {}", valuation, error);
        }
        Some(TruthTableRow { valuation, result })
    }
}

/// Rows are printed as `V`/`F` values in header order, followed by the result. Rows which
/// could not be evaluated show the error instead of the result.
impl Display for TruthTableRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.valuation.num_vars() > 0 {
            write!(f, "{}\t", self.valuation)?;
        }
        match &self.result {
            Ok(value) => write!(f, "| {}", symbol(*value)),
            Err(error) => write!(f, "| error: {}", error),
        }
    }
}

impl Display for TruthTableHeader<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        for var in &self.table.variables {
            write!(f, "{}\t", var)?;
        }
        writeln!(f, "| Result")?;
        writeln!(f, "--------------------------------")
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.header())?;
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
