//! # Generating truth tables
//!
//! A `TruthTable` runs the whole pipeline once and then evaluates the expression in every
//! valuation of its variables. Variables are sorted in ascending lexicographic order and
//! the valuations follow an increasing binary counter, where the first variable is the
//! least significant bit:
//!
//! ```rust
//! use truth_table::TruthTable;
//!
//! let table = TruthTable::new("b + !a").unwrap();
//! assert_eq!(vec!["a", "b"], table.variables());
//! assert_eq!(Some(4), table.row_count());
//!
//! let rows: Vec<(Vec<bool>, bool)> = table
//!     .rows()
//!     .map(|row| (row.valuation.vector(), row.result.unwrap()))
//!     .collect();
//! assert_eq!(
//!     vec![
//!         (vec![false, false], true),
//!         (vec![true, false], false),
//!         (vec![false, true], true),
//!         (vec![true, true], true),
//!     ],
//!     rows
//! );
//! ```
//!
//! A row that cannot be evaluated carries the `EvalError` instead of a value, and the
//! remaining rows are still produced. Printing a table gives the classic tabular layout
//! with `V` for true and `F` for false:
//!
//! ```rust
//! use truth_table::TruthTable;
//!
//! let table = TruthTable::new("a + b").unwrap();
//! assert_eq!(
//!     "a\tb\t| Result\n\
//!      --------------------------------\n\
//!      F\tF\t| F\n\
//!      V\tF\t| V\n\
//!      F\tV\t| V\n\
//!      V\tV\t| V\n",
//!     table.to_string()
//! );
//! ```
//!
//! Expressions that cannot be lexed, that contain unbalanced parentheses, or that are
//! empty are rejected before any row is evaluated. Use `TruthTable::new_lenient` to
//! tolerate unbalanced parentheses.
//!
//! ```rust
//! use truth_table::{TruthTable, TruthTableError};
//!
//! assert_eq!(Err(TruthTableError::EmptyExpression), TruthTable::new(""));
//! assert!(TruthTable::new("a + b)").is_err());
//! assert!(TruthTable::new_lenient("a + b)").is_ok());
//! ```
//!
//! Tables grow exponentially. `TruthTable::is_large` reports tables with more than
//! `LARGE_TABLE_THRESHOLD` variables; they can still be enumerated, but it will take a while.
