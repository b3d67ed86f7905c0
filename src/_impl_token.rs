use crate::{Token, TokenKind};
use std::fmt::{Display, Error, Formatter};

/// **(internal)** Single-character operators together with their precedence. Negation binds
/// tightest, then conjunction, then disjunction. Parentheses have no precedence.
const PRECEDENCE: [(char, u8); 3] = [('!', 3), ('*', 2), ('+', 1)];

impl TokenKind {
    /// True if `c` is a valid `Operator` symbol.
    pub fn is_operator_char(c: char) -> bool {
        PRECEDENCE.iter().any(|(op, _)| *op == c)
    }

    /// True if `c` is a valid `Parenthesis` symbol.
    pub fn is_parenthesis_char(c: char) -> bool {
        c == '(' || c == ')'
    }

    /// True if `c` can start a variable name.
    pub fn is_variable_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    /// True if `c` can appear inside a variable name.
    pub fn is_variable_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }
}

impl Token {
    /// Create a new token with the given `value` and `kind`. Returns `None` if the `value`
    /// is not valid for the `kind` (e.g. an operator other than `!`, `*`, `+`, or a variable
    /// name starting with a digit).
    pub fn new(value: &str, kind: TokenKind) -> Option<Token> {
        if Token::is_valid(value, kind) {
            Some(Token::new_unchecked(value, kind))
        } else {
            None
        }
    }

    /// **(internal)** Create a token the caller already knows to be valid.
    ///
    /// *Panics:* With `shields_up` enabled, the `value` must be valid for the given `kind`.
    pub(crate) fn new_unchecked(value: &str, kind: TokenKind) -> Token {
        if cfg!(feature = "shields_up") && !Token::is_valid(value, kind) {
            panic!("`{}` is not a valid {:?} token.", value, kind);
        }
        Token {
            value: value.to_string(),
            kind,
        }
    }

    /// **(internal)** Create a `Variable` token from a name accepted by the lexer.
    pub(crate) fn variable(name: &str) -> Token {
        Token::new_unchecked(name, TokenKind::Variable)
    }

    /// **(internal)** Create an `Operator` token (`!`, `*` or `+`).
    pub(crate) fn operator(symbol: char) -> Token {
        Token::new_unchecked(&symbol.to_string(), TokenKind::Operator)
    }

    /// **(internal)** Create a `Parenthesis` token (`(` or `)`).
    pub(crate) fn parenthesis(symbol: char) -> Token {
        Token::new_unchecked(&symbol.to_string(), TokenKind::Parenthesis)
    }

    /// The literal text of this token.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn is_variable(&self) -> bool {
        self.kind == TokenKind::Variable
    }

    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }

    pub fn is_parenthesis(&self) -> bool {
        self.kind == TokenKind::Parenthesis
    }

    /// True if this is the `(` token.
    pub fn is_open(&self) -> bool {
        self.is_parenthesis() && self.value == "("
    }

    /// True if this is the `)` token.
    pub fn is_close(&self) -> bool {
        self.is_parenthesis() && self.value == ")"
    }

    /// The first character of the token value. For operators and parentheses, this
    /// is the whole token.
    pub(crate) fn symbol(&self) -> Option<char> {
        self.value.chars().next()
    }

    /// Binding power of an `Operator` token. Returns `None` for every other token kind,
    /// since variables and parentheses must never be compared by precedence.
    pub fn precedence(&self) -> Option<u8> {
        if !self.is_operator() {
            return None;
        }
        let symbol = self.symbol()?;
        PRECEDENCE
            .iter()
            .find(|(op, _)| *op == symbol)
            .map(|(_, precedence)| *precedence)
    }

    /// True for operators that take a single operand placed after them.
    pub fn is_prefix_operator(&self) -> bool {
        self.is_operator() && self.value == "!"
    }

    /// **(internal)** Check that `value` satisfies the invariants of `kind`.
    fn is_valid(value: &str, kind: TokenKind) -> bool {
        let mut chars = value.chars();
        match kind {
            TokenKind::Operator => {
                matches!((chars.next(), chars.next()), (Some(c), None) if TokenKind::is_operator_char(c))
            }
            TokenKind::Parenthesis => {
                matches!((chars.next(), chars.next()), (Some(c), None) if TokenKind::is_parenthesis_char(c))
            }
            TokenKind::Variable => match chars.next() {
                Some(first) => {
                    TokenKind::is_variable_start(first) && chars.all(TokenKind::is_variable_char)
                }
                None => false,
            },
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.value)
    }
}
