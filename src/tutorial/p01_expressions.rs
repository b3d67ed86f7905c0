//! # Tokens, postfix form and evaluation
//!
//! An expression is processed in three steps. First, `TokenSequence::tokenize` splits the
//! string into tokens. Every token has a `TokenKind` and a literal `value`:
//!
//! ```rust
//! use truth_table::{TokenKind, TokenSequence};
//!
//! let infix = TokenSequence::tokenize("!x_1 * (y + z)").unwrap();
//! assert_eq!(8, infix.len());
//! assert_eq!(TokenKind::Operator, infix[0].kind());
//! assert_eq!("x_1", infix[1].value());
//! assert_eq!(TokenKind::Parenthesis, infix[3].kind());
//!
//! // Characters which cannot start a token are reported together with their position.
//! let error = TokenSequence::tokenize("x & y").unwrap_err();
//! assert_eq!('&', error.character);
//! assert_eq!(2, error.position);
//! ```
//!
//! Second, the infix sequence is converted to postfix order. Negation binds tightest, then
//! conjunction, then disjunction. Operators of the same precedence are evaluated from left
//! to right:
//!
//! ```rust
//! use truth_table::TokenSequence;
//!
//! let postfix = TokenSequence::tokenize("a + b * !c + d").unwrap().to_postfix();
//! assert_eq!("a b c ! * + d +", postfix.to_string());
//! ```
//!
//! The conversion itself never fails: a stray `)` is ignored and an unclosed `(` ends up
//! in the output, where the evaluator skips it. If you want to know about unbalanced
//! parentheses, use `try_to_postfix`:
//!
//! ```rust
//! use truth_table::{ConversionError, TokenSequence};
//!
//! let infix = TokenSequence::tokenize("(a + b").unwrap();
//! assert_eq!("a b + (", infix.to_postfix().to_string());
//! assert_eq!(
//!     Err(ConversionError::MismatchedParenthesis { position: 0 }),
//!     infix.try_to_postfix()
//! );
//! ```
//!
//! Finally, the postfix sequence is evaluated in a `VariableAssignment`. Every variable
//! of the expression must be assigned, there are no default values:
//!
//! ```rust
//! use truth_table::{EvalError, TokenSequence, VariableAssignment};
//!
//! let postfix = TokenSequence::tokenize("a * !b").unwrap().to_postfix();
//!
//! let mut assignment = VariableAssignment::new();
//! assignment.set("a", true);
//! assert_eq!(
//!     Err(EvalError::UnknownVariable("b".to_string())),
//!     postfix.eval_postfix(&assignment)
//! );
//!
//! assignment.set("b", false);
//! assert_eq!(Ok(true), postfix.eval_postfix(&assignment));
//!
//! // Operators without operands are detected too.
//! let broken = TokenSequence::tokenize("a *").unwrap().to_postfix();
//! assert_eq!(Err(EvalError::StackUnderflow('*')), broken.eval_postfix(&assignment));
//! ```
