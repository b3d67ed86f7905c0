use super::*;

/// Tokenize `input`, convert it leniently to postfix and evaluate it in the assignment
/// given by `values`.
///
/// *Panics:* `input` must be accepted by the lexer.
pub fn eval_string(input: &str, values: &[(&str, bool)]) -> Result<bool, EvalError> {
    let postfix = TokenSequence::tokenize(input)
        .expect("Cannot tokenize test expression.")
        .to_postfix();
    let assignment: VariableAssignment = values.iter().cloned().collect();
    postfix.eval_postfix(&assignment)
}
