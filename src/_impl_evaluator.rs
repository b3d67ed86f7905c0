use crate::logging::targets;
use crate::{EvalError, TokenSequence, VariableAssignment};

/// Methods for evaluating postfix sequences.
impl TokenSequence {
    /// Evaluate this *postfix* sequence in the given `VariableAssignment`.
    ///
    /// The sequence is processed by a stack machine: variables push their value, `!` replaces
    /// the top of the stack with its negation and `*`/`+` replace the two topmost values
    /// with their conjunction/disjunction. Parentheses (which can only appear in the output
    /// of a lenient conversion) are skipped.
    ///
    /// Evaluation stops at the first problem: a variable missing in the `assignment`, an
    /// operator without enough operands, or a stack that does not end with exactly one value.
    pub fn eval_postfix(&self, assignment: &VariableAssignment) -> Result<bool, EvalError> {
        let mut stack: Vec<bool> = Vec::with_capacity(self.len());
        for token in self.iter() {
            if token.is_variable() {
                match assignment.get(token.value()) {
                    Some(value) => stack.push(value),
                    None => return Err(EvalError::UnknownVariable(token.value().to_string())),
                }
            } else if token.is_operator() {
                match token.symbol() {
                    Some('!') => {
                        let value = stack.pop().ok_or(EvalError::StackUnderflow('!'))?;
                        stack.push(!value);
                    }
                    Some(op @ '*') | Some(op @ '+') => {
                        let (left, right) = pop_operands(&mut stack, op)?;
                        stack.push(if op == '*' { left && right } else { left || right });
                    }
                    _ => {
                        log::trace!(target: targets::EVALUATION, "Skipping unknown operator `{}`.", token);
                    }
                }
            } else {
                log::trace!(target: targets::EVALUATION, "Skipping `{}`.", token);
            }
        }

        match stack.as_slice() {
            [result] => Ok(*result),
            _ => {
                log::debug!(
                    target: targets::EVALUATION,
                    "Expected one value on the stack, found {}.",
                    stack.len()
                );
                Err(EvalError::MalformedExpression)
            }
        }
    }
}

/// **(internal)** Pop operands of a binary operator. The right operand is on top of the
/// stack. Returns `(left, right)`.
fn pop_operands(stack: &mut Vec<bool>, op: char) -> Result<(bool, bool), EvalError> {
    let right = stack.pop().ok_or(EvalError::StackUnderflow(op))?;
    let left = stack.pop().ok_or(EvalError::StackUnderflow(op))?;
    Ok((left, right))
}
