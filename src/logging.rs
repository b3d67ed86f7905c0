//! Items related to [logging](log).
//!
//! The library emits `log` records while lexing, converting and evaluating expressions.
//! No log implementation is installed here; the `truth_table` binary uses `env_logger`.

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to tokenization of the input string.
    pub const LEXER: &str = "lexer";

    /// Logs related to the infix to postfix conversion.
    pub const POSTFIX: &str = "postfix";

    /// Logs related to the evaluation of postfix sequences.
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to truth table construction and enumeration.
    pub const TABLE: &str = "table";
}
