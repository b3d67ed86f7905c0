//! # Truth Table
//!
//! This crate turns a textual boolean expression into a complete [truth table](https://en.wikipedia.org/wiki/Truth_table).
//!
//! The expression is processed by a small pipeline:
//!
//!  - A lexer splits the input into `Token`s (variables, operators and parentheses).
//!  - A [shunting-yard](https://en.wikipedia.org/wiki/Shunting_yard_algorithm) converter
//!    rewrites the infix `TokenSequence` into postfix order.
//!  - A stack machine evaluates the postfix sequence in one `VariableAssignment`.
//!
//! On top of that, `TruthTable` enumerates all `2^n` valuations of the expression variables
//! and evaluates the expression in each of them. The supported syntax is deliberately tiny:
//! variables match `[A-Za-z_][A-Za-z0-9_]*`, `!` is negation, `*` is conjunction, `+` is
//! disjunction and `(`, `)` group sub-expressions. Whitespace is ignored.
//!
//! More detailed description can be found in our [tutorial module](./tutorial/index.html).
//!
//! ```rust
//! use truth_table::*;
//!
//! let infix = TokenSequence::tokenize("(a + b) * !c").unwrap();
//! assert_eq!(vec!["a", "b", "c"], infix.variables());
//!
//! let postfix = infix.to_postfix();
//! assert_eq!("a b + c ! *", postfix.to_string());
//!
//! let assignment: VariableAssignment =
//!     vec![("a", false), ("b", true), ("c", false)].into_iter().collect();
//! assert_eq!(Ok(true), postfix.eval_postfix(&assignment));
//!
//! let table = TruthTable::try_from("a * b").unwrap();
//! let results: Vec<bool> = table.rows().map(|row| row.result.unwrap()).collect();
//! assert_eq!(vec![false, false, false, true], results);
//! ```
//!

use fxhash::FxBuildHasher;
use std::collections::HashMap;

pub mod logging;
pub mod tutorial;

/// **(internal)** Implementation of the `Token` and `TokenKind`.
mod _impl_token;

/// **(internal)** Implementation of the `TokenSequence` utility methods.
mod _impl_token_sequence;

/// **(internal)** The lexer which turns a string into an infix `TokenSequence`.
mod _impl_lexer;

/// **(internal)** The infix to postfix (shunting-yard) conversion.
mod _impl_postfix;

/// **(internal)** The postfix stack machine.
mod _impl_evaluator;

/// **(internal)** Implementation of the `VariableAssignment`.
mod _impl_variable_assignment;

/// **(internal)** Implementation of the `Valuation` and `ValuationsIterator`.
mod _impl_valuation;

/// **(internal)** Implementation of the `TruthTable` and its row iterator.
mod _impl_truth_table;

/// **(internal)** `Display` and `Error` implementations for the error types.
mod _impl_errors;

/// **(internal)** Randomized tests of the whole expression pipeline.
#[cfg(test)]
mod _test_truth_table;

/// Several basic utility methods for testing.
#[cfg(test)]
mod _test_util;

/// Tables with more variables than this are considered impractically large. Enumerating
/// them is still allowed, but callers should warn the user.
pub const LARGE_TABLE_THRESHOLD: usize = 20;

/// The three syntactic categories of a `Token`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    Variable,
    Operator,
    Parenthesis,
}

/// An immutable lexical unit of a boolean expression.
///
/// For `Operator` tokens, the `value` is one of `!`, `*` or `+`. For `Parenthesis` tokens,
/// it is `(` or `)`. For `Variable` tokens, it is a non-empty name consisting of letters,
/// digits and underscores that does not start with a digit.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Token {
    value: String,
    kind: TokenKind,
}

/// An ordered sequence of `Token`s. Depending on where it came from, it represents either
/// the infix form of an expression (lexer output) or the postfix form (converter output).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct TokenSequence(Vec<Token>);

/// Maps (case-sensitive) variable names to truth values.
///
/// Evaluation never substitutes a default value for a variable missing in the assignment.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VariableAssignment(HashMap<String, bool, FxBuildHasher>);

/// Exactly describes one row of a truth table: the value at index `j` belongs to
/// the `j`-th variable in the (sorted) variable list of the table.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Valuation(Vec<bool>);

/// Exhaustively iterates over all valuations with a certain number of variables.
///
/// Valuations are visited in the order of an increasing binary counter where the
/// first variable is the least significant bit.
///
/// Be aware of the exponential time complexity of such operation!
#[derive(Clone, Debug)]
pub struct ValuationsIterator {
    next_valuation: Option<Valuation>,
}

/// A boolean expression prepared for exhaustive evaluation.
///
/// The table stores the postfix form of the expression together with its variables
/// sorted in ascending lexicographic order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTable {
    expression: String,
    variables: Vec<String>,
    postfix: TokenSequence,
}

/// One evaluated row of a `TruthTable`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TruthTableRow {
    pub valuation: Valuation,
    pub result: Result<bool, EvalError>,
}

/// An iterator over all rows of a `TruthTable`.
pub struct TruthTableRows<'a> {
    table: &'a TruthTable,
    valuations: ValuationsIterator,
}

/// Header of a `TruthTable` (variable names, result column, separator line), as returned
/// by `TruthTable::header`.
#[derive(Clone, Copy, Debug)]
pub struct TruthTableHeader<'a> {
    table: &'a TruthTable,
}

/// The lexer found a character which cannot start any token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LexError {
    /// The offending character.
    pub character: char,
    /// Position of the character in the input (counted in characters, starting at zero).
    pub position: usize,
}

/// Reasons why a postfix sequence could not be evaluated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EvalError {
    /// A variable is not present in the `VariableAssignment`.
    UnknownVariable(String),
    /// An operator did not find enough operands on the evaluation stack.
    StackUnderflow(char),
    /// The evaluation stack does not hold exactly one value at the end.
    MalformedExpression,
}

/// Reported by the strict infix to postfix conversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConversionError {
    /// A `)` without matching `(`, or an unclosed `(`. The position is an index into
    /// the infix `TokenSequence`.
    MismatchedParenthesis { position: usize },
}

/// Reasons why a `TruthTable` could not be created from a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TruthTableError {
    Lex(LexError),
    Conversion(ConversionError),
    /// The expression contains no tokens at all.
    EmptyExpression,
}
