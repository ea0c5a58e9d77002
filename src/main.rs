use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fuzzy_truth::{cases, eval, table};

/// Evaluates the fuzzy formula f9 = A -> NOT(B AND C) over fixed truth
/// degrees: a worked single-case trace, then a table of ten test cases.
#[derive(Parser)]
#[command(name = "fuzzy-truth", version, about)]
struct Cli;

/// The named worked example.
const EXAMPLE: (f64, f64, f64) = (0.8, 0.6, 0.3);

fn main() -> Result<()> {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let (a, b, c) = EXAMPLE;
    writeln!(out, "Input truth degrees: A={a}, B={b}, C={c}")?;
    writeln!(out)?;

    let evaluation = eval::evaluate_traced(a, b, c, &mut out)?;

    writeln!(out)?;
    writeln!(out, "Final truth degree of f9: {}", evaluation.result)?;
    writeln!(out)?;

    let rows = cases::evaluate_all();
    writeln!(out, "{}", table::render(&rows))?;

    Ok(())
}
