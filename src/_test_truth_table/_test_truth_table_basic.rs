use crate::*;

fn results(expression: &str) -> Vec<bool> {
    TruthTable::new(expression)
        .unwrap()
        .rows()
        .map(|row| row.result.unwrap())
        .collect()
}

fn is_tautology(expression: &str) -> bool {
    results(expression).into_iter().all(|r| r)
}

fn is_contradiction(expression: &str) -> bool {
    results(expression).into_iter().all(|r| !r)
}

#[test]
fn excluded_middle() {
    assert!(is_tautology("a + !a"));
    assert!(is_contradiction("a * !a"));
}

#[test]
fn de_morgan() {
    assert_eq!(results("!(a + b)"), results("!a * !b"));
    assert_eq!(results("!(a * b)"), results("!a + !b"));
}

#[test]
fn distributivity() {
    assert_eq!(results("a * (b + c)"), results("a * b + a * c"));
    assert_eq!(results("a + b * c"), results("(a + b) * (a + c)"));
}

#[test]
fn associativity() {
    assert_eq!(results("(a + b) + c"), results("a + (b + c)"));
    assert_eq!(results("(a * b) * c"), results("a * (b * c)"));
}

#[test]
fn double_negation() {
    assert_eq!(results("a"), results("!(!a)"));
    assert_eq!(results("!a"), results("!(!(!a))"));
}

#[test]
fn negation_chain_fails_in_every_row() {
    let table = TruthTable::new("!!a + b").unwrap();
    let rows: Vec<TruthTableRow> = table.rows().collect();
    assert_eq!(4, rows.len());
    assert!(rows
        .iter()
        .all(|row| row.result == Err(EvalError::StackUnderflow('!'))));
}

#[test]
fn and_binds_tighter_than_or() {
    // a + (b * c), not (a + b) * c
    assert_eq!(
        vec![false, true, false, true, false, true, true, true],
        results("a + b * c")
    );
}

#[test]
fn negation_binds_tightest() {
    // (!a) * b, not !(a * b)
    assert_eq!(vec![false, false, true, false], results("!a * b"));
}

#[test]
fn whitespace_is_irrelevant() {
    assert_eq!(results("(a+b)*!c"), results(" ( a +\tb ) *  ! c "));
}

#[test]
fn variables_are_case_sensitive() {
    let table = TruthTable::new("a * A").unwrap();
    assert_eq!(vec!["A", "a"], table.variables());
    assert_eq!(vec![false, false, false, true], results("a * A"));
}
