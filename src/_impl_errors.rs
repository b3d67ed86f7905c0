use crate::{ConversionError, EvalError, LexError, TruthTableError};
use std::fmt::{Display, Error, Formatter};

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(
            f,
            "invalid character `{}` at position {}",
            self.character, self.position
        )
    }
}

impl std::error::Error for LexError {}

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            EvalError::UnknownVariable(name) => write!(f, "variable `{}` is not assigned", name),
            EvalError::StackUnderflow(op) => write!(f, "operator `{}` is missing an operand", op),
            EvalError::MalformedExpression => write!(f, "malformed expression"),
        }
    }
}

impl std::error::Error for EvalError {}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            ConversionError::MismatchedParenthesis { position } => {
                write!(f, "mismatched parenthesis at token {}", position)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl Display for TruthTableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            TruthTableError::Lex(e) => write!(f, "{}", e),
            TruthTableError::Conversion(e) => write!(f, "{}", e),
            TruthTableError::EmptyExpression => write!(f, "expression is empty"),
        }
    }
}

impl std::error::Error for TruthTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TruthTableError::Lex(e) => Some(e),
            TruthTableError::Conversion(e) => Some(e),
            TruthTableError::EmptyExpression => None,
        }
    }
}

// Lexing failures abort the whole table.
impl From<LexError> for TruthTableError {
    fn from(value: LexError) -> Self {
        TruthTableError::Lex(value)
    }
}

impl From<ConversionError> for TruthTableError {
    fn from(value: ConversionError) -> Self {
        TruthTableError::Conversion(value)
    }
}
