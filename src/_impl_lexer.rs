//!
//! The lexer scans the input exactly once, from left to right. Whitespace is skipped,
//! single-character operators and parentheses become tokens on their own and a maximal
//! run of letters, digits and underscores (starting with a letter or an underscore)
//! becomes one variable. Anything else aborts the whole scan.

use crate::logging::targets;
use crate::{LexError, Token, TokenKind, TokenSequence};
use std::convert::TryFrom;
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

impl TokenSequence {
    /// Takes a `&str` and turns it into an infix `TokenSequence`, or a `LexError` naming
    /// the first character that cannot start a token.
    pub fn tokenize(from: &str) -> Result<TokenSequence, LexError> {
        let mut data = from.chars().enumerate().peekable();
        let mut output = Vec::new();
        while let Some((position, c)) = data.next() {
            match c {
                c if c.is_whitespace() => { /* skip whitespace */ }
                c if TokenKind::is_operator_char(c) => output.push(Token::operator(c)),
                c if TokenKind::is_parenthesis_char(c) => output.push(Token::parenthesis(c)),
                c if TokenKind::is_variable_start(c) => {
                    output.push(Token::variable(&read_variable(c, &mut data)));
                }
                _ => {
                    log::debug!(target: targets::LEXER, "Unexpected `{}` at position {}.", c, position);
                    return Err(LexError {
                        character: c,
                        position,
                    });
                }
            }
        }
        log::trace!(target: targets::LEXER, "Produced {} tokens from `{}`.", output.len(), from);
        Ok(TokenSequence(output))
    }
}

impl TryFrom<&str> for TokenSequence {
    type Error = LexError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TokenSequence::tokenize(value)
    }
}

/// **(internal)** Read the rest of a variable name which starts with `first`.
/// The iterator is advanced only over characters which belong to the name.
fn read_variable(first: char, data: &mut Peekable<Enumerate<Chars>>) -> String {
    let mut name = String::new();
    name.push(first);
    while let Some((_, c)) = data.peek() {
        if TokenKind::is_variable_char(*c) {
            name.push(*c);
            data.next(); // advance iterator
        } else {
            break;
        }
    }
    name
}
