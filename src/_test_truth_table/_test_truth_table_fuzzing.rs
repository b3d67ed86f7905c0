//!
//! A small toolbox for fuzzing the expression pipeline.
//!
//! We generate a random expression tree, print it as a string (either with the minimal
//! number of parentheses allowed by operator precedence, or fully parenthesized) and
//! build a `TruthTable` from that string. Then every row of the table is compared with
//! a direct recursive evaluation of the tree. To get predictable test cases, we use
//! a predefined set of randomness seeds.

use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

const VAR_NAMES: [&str; 6] = ["a", "b", "c1", "_d", "Ee", "long_name_7"];

#[derive(Debug)]
enum ExprTree {
    Var(&'static str),
    Not(Box<ExprTree>),
    And(Box<ExprTree>, Box<ExprTree>),
    Or(Box<ExprTree>, Box<ExprTree>),
}

impl ExprTree {
    /// Create a new random tree of at most `depth` levels using the first `num_vars`
    /// variable names.
    fn new_random(rand: &mut StdRng, depth: u8, num_vars: usize) -> ExprTree {
        if depth == 0 || rand.next_u32() % 5 == 0 {
            let id = rand.next_u32() as usize % num_vars;
            return ExprTree::Var(VAR_NAMES[id]);
        }
        match rand.next_u32() % 4 {
            0 => ExprTree::Not(Box::new(Self::new_random(rand, depth - 1, num_vars))),
            1 => ExprTree::And(
                Box::new(Self::new_random(rand, depth - 1, num_vars)),
                Box::new(Self::new_random(rand, depth - 1, num_vars)),
            ),
            _ => ExprTree::Or(
                Box::new(Self::new_random(rand, depth - 1, num_vars)),
                Box::new(Self::new_random(rand, depth - 1, num_vars)),
            ),
        }
    }

    /// Binding power of the root of this tree.
    fn precedence(&self) -> u8 {
        match self {
            ExprTree::Var(_) | ExprTree::Not(_) => 3,
            ExprTree::And(_, _) => 2,
            ExprTree::Or(_, _) => 1,
        }
    }

    /// True if this tree is a single variable.
    fn is_var(&self) -> bool {
        matches!(self, ExprTree::Var(_))
    }

    /// Print the tree using only the parentheses required by precedence and left
    /// associativity. The operand of `!` is parenthesized unless it is a variable, since
    /// `!!x` pops the first `!` before its operand is known.
    fn to_minimal_string(&self) -> String {
        match self {
            ExprTree::Var(name) => name.to_string(),
            ExprTree::Not(inner) => format!("!{}", inner.wrapped(!inner.is_var())),
            ExprTree::And(l, r) => format!(
                "{}*{}",
                l.wrapped(l.precedence() < 2),
                r.wrapped(r.precedence() <= 2)
            ),
            ExprTree::Or(l, r) => {
                format!("{} + {}", l.wrapped(false), r.wrapped(r.precedence() <= 1))
            }
        }
    }

    fn wrapped(&self, needs_parens: bool) -> String {
        if needs_parens {
            format!("({})", self.to_minimal_string())
        } else {
            self.to_minimal_string()
        }
    }

    /// Print the tree with every binary operation in parentheses. Nested negation is
    /// printed as `!(!x)`.
    fn to_full_string(&self) -> String {
        match self {
            ExprTree::Var(name) => name.to_string(),
            ExprTree::Not(inner) if matches!(**inner, ExprTree::Not(_)) => {
                format!("!({})", inner.to_full_string())
            }
            ExprTree::Not(inner) => format!("!{}", inner.to_full_string()),
            ExprTree::And(l, r) => format!("({} * {})", l.to_full_string(), r.to_full_string()),
            ExprTree::Or(l, r) => format!("({} + {})", l.to_full_string(), r.to_full_string()),
        }
    }

    /// Evaluate this tree recursively in the given assignment.
    fn eval_in(&self, assignment: &VariableAssignment) -> bool {
        match self {
            ExprTree::Var(name) => assignment.get(name).unwrap(),
            ExprTree::Not(inner) => !inner.eval_in(assignment),
            ExprTree::And(l, r) => l.eval_in(assignment) && r.eval_in(assignment),
            ExprTree::Or(l, r) => l.eval_in(assignment) || r.eval_in(assignment),
        }
    }
}

const FUZZ_SEEDS: [u64; 10] = [
    1, 12, 123, 1234, 12345, 123456, 1234567, 12345678, 123456789, 1234567890,
];

fn fuzz_test(num_vars: usize, depth: u8, seed: u64) {
    let mut rand = StdRng::seed_from_u64(seed);
    let tree = ExprTree::new_random(&mut rand, depth, num_vars);
    for expression in [tree.to_minimal_string(), tree.to_full_string()].iter() {
        let table = TruthTable::new(expression).unwrap();
        let mut rows = 0;
        for row in table.rows() {
            let assignment = VariableAssignment::from_valuation(table.variables(), &row.valuation);
            assert_eq!(
                Ok(tree.eval_in(&assignment)),
                row.result,
                "Error in `{}` for valuation [{}]",
                expression,
                row.valuation
            );
            rows += 1;
        }
        assert_eq!(Some(rows), table.row_count());
    }
}

#[test]
fn fuzz_var_2() {
    for depth in 1..6 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(2, depth, *seed);
        }
    }
}

#[test]
fn fuzz_var_4() {
    for depth in 1..8 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(4, depth, *seed);
        }
    }
}

#[test]
fn fuzz_var_6() {
    for depth in 1..10 {
        for seed in FUZZ_SEEDS.iter() {
            fuzz_test(6, depth, *seed);
        }
    }
}

#[test]
fn fuzz_postfix_has_no_parentheses() {
    for seed in FUZZ_SEEDS.iter() {
        let mut rand = StdRng::seed_from_u64(*seed);
        let tree = ExprTree::new_random(&mut rand, 6, 6);
        let infix = TokenSequence::tokenize(&tree.to_minimal_string()).unwrap();
        let postfix = infix.try_to_postfix().unwrap();
        assert!(postfix.iter().all(|t| !t.is_parenthesis()));
        assert_eq!(
            infix.iter().filter(|t| t.is_variable()).count(),
            postfix.iter().filter(|t| t.is_variable()).count()
        );
    }
}

#[test]
fn fuzz_negation_chain_always_underflows() {
    for seed in FUZZ_SEEDS.iter() {
        let mut rand = StdRng::seed_from_u64(*seed);
        let tree = ExprTree::new_random(&mut rand, 5, 4);
        let expression = format!("!!({})", tree.to_minimal_string());
        let infix = TokenSequence::tokenize(&expression).unwrap();
        let postfix = infix.try_to_postfix().unwrap();
        assert_eq!(Some(&Token::operator('!')), postfix.tokens().first());

        let table = TruthTable::new(&expression).unwrap();
        for row in table.rows() {
            assert_eq!(
                Err(EvalError::StackUnderflow('!')),
                row.result,
                "Error in `{}` for valuation [{}]",
                expression,
                row.valuation
            );
        }
    }
}
