//!
//! Infix to postfix conversion using the shunting-yard algorithm.
//!
//! Variables go straight to the output, operators wait on a working stack until an operator
//! with lower precedence (or a closing parenthesis) forces them out. Equal precedence pops,
//! so `a + b + c` is read as `(a + b) + c`. The rule applies to the unary `!` as well:
//! `!!a` becomes `! a !`, which the evaluator rejects, while `!(!a)` becomes `a ! !`.
//!
//! Two variants are provided. `to_postfix` never fails: an unmatched `)` stops popping
//! and an unclosed `(` is flushed into the output, where the evaluator skips it.
//! `try_to_postfix` reports both situations as `ConversionError::MismatchedParenthesis`.

use crate::logging::targets;
use crate::{ConversionError, Token, TokenSequence};

/// **(internal)** How the converter treats unbalanced parentheses.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParenthesisPolicy {
    Lenient,
    Strict,
}

impl TokenSequence {
    /// Convert this infix sequence into postfix order. Unbalanced parentheses are
    /// tolerated silently.
    pub fn to_postfix(&self) -> TokenSequence {
        match shunting_yard(self, ParenthesisPolicy::Lenient) {
            Ok(postfix) => postfix,
            Err(_) => unreachable!("Lenient conversion never reports an error."),
        }
    }

    /// Convert this infix sequence into postfix order, failing with
    /// `ConversionError::MismatchedParenthesis` when the parentheses are not balanced.
    pub fn try_to_postfix(&self) -> Result<TokenSequence, ConversionError> {
        shunting_yard(self, ParenthesisPolicy::Strict)
    }
}

/// **(internal)** True if the `top` of the working stack has to be moved to the output
/// before `incoming` can be pushed.
fn should_pop(top: &Token, incoming: &Token) -> bool {
    match (top.precedence(), incoming.precedence()) {
        (Some(top), Some(incoming)) => top >= incoming,
        _ => false,
    }
}

/// **(internal)** The shared conversion loop.
fn shunting_yard(
    infix: &TokenSequence,
    policy: ParenthesisPolicy,
) -> Result<TokenSequence, ConversionError> {
    let mut output: Vec<Token> = Vec::with_capacity(infix.len());
    // Working stack keeps the operator tokens and the index of every `(` in the infix input.
    let mut stack: Vec<(usize, &Token)> = Vec::new();

    for (position, token) in infix.iter().enumerate() {
        if token.is_variable() {
            output.push(token.clone());
        } else if token.is_open() {
            stack.push((position, token));
        } else if token.is_close() {
            let mut matched = false;
            while let Some((_, top)) = stack.pop() {
                if top.is_open() {
                    matched = true;
                    break;
                }
                output.push(top.clone());
            }
            if !matched {
                log::debug!(target: targets::POSTFIX, "Unmatched `)` at token {}.", position);
                if policy == ParenthesisPolicy::Strict {
                    return Err(ConversionError::MismatchedParenthesis { position });
                }
            }
        } else if token.is_operator() {
            while let Some((_, top)) = stack.last() {
                if !should_pop(top, token) {
                    break;
                }
                output.push((*top).clone());
                stack.pop();
            }
            stack.push((position, token));
        }
    }

    while let Some((position, top)) = stack.pop() {
        if top.is_open() {
            log::debug!(target: targets::POSTFIX, "Unclosed `(` at token {}.", position);
            if policy == ParenthesisPolicy::Strict {
                return Err(ConversionError::MismatchedParenthesis { position });
            }
        }
        output.push(top.clone());
    }

    let postfix = TokenSequence::new(output);
    log::trace!(target: targets::POSTFIX, "Converted `{}` to `{}`.", infix, postfix);
    Ok(postfix)
}
