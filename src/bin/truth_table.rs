//! Print the truth table of a boolean expression.
//!
//! The expression is taken from the command line, or read as a single line from the
//! standard input when no argument is given.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use truth_table::logging::targets;
use truth_table::{TruthTable, TruthTableError, LARGE_TABLE_THRESHOLD};

/// Print the truth table of a boolean expression.
///
/// Variables match `[A-Za-z_][A-Za-z0-9_]*`, `!` is negation, `*` is conjunction,
/// `+` is disjunction and parentheses group sub-expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate (read from standard input if missing).
    expression: Option<String>,

    /// Tolerate unbalanced parentheses instead of reporting them.
    #[arg(long)]
    lenient: bool,

    /// Stop at the first row which cannot be evaluated.
    #[arg(long)]
    abort_on_error: bool,

    /// Print the postfix form of the expression before the table.
    #[arg(long)]
    postfix: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let expression = match args.expression.clone() {
        Some(expression) => expression,
        None => match read_expression() {
            Ok(expression) => expression,
            Err(e) => {
                eprintln!("Error: cannot read expression: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let table = match build_table(&expression, args.lenient) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if table.is_large() {
        log::warn!(
            target: targets::TABLE,
            "More than {} variables, the truth table has {} rows and may take very long.",
            LARGE_TABLE_THRESHOLD,
            table
                .row_count()
                .map(|count| count.to_string())
                .unwrap_or_else(|| format!("2^{}", table.num_vars()))
        );
    }

    match print_table(&table, &args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: cannot write table: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Prompt for the expression and read one line from the standard input.
fn read_expression() -> io::Result<String> {
    print!("Enter a boolean expression (use +, *, !, ( and ) with variable names made of letters, digits and _): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn build_table(expression: &str, lenient: bool) -> Result<TruthTable, TruthTableError> {
    if lenient {
        TruthTable::new_lenient(expression)
    } else {
        TruthTable::new(expression)
    }
}

/// Print the whole table. Returns `Ok(false)` if the table was aborted because of
/// a row error.
fn print_table(table: &TruthTable, args: &Args) -> io::Result<bool> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.postfix {
        writeln!(out, "Postfix: {}", table.postfix())?;
    }

    write!(out, "{}", table.header())?;

    for row in table.rows() {
        writeln!(out, "{}", row)?;
        if let Err(e) = &row.result {
            if args.abort_on_error {
                out.flush()?;
                eprintln!("Error: evaluation failed in row [{}]: {}", row.valuation, e);
                return Ok(false);
            }
        }
    }
    out.flush()?;
    Ok(true)
}
