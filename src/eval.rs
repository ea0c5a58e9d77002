use std::fmt::Display;
use std::io::{self, Write};

use num::Float;

use crate::ops;

/// One full pass of the formula `A → ¬(B ∧ C)` with every intermediate
/// value kept at full precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation<F> {
    /// `B ∧ C`
    pub conjunction: F,
    /// `¬(B ∧ C)`
    pub negation: F,
    /// `A → ¬(B ∧ C)`
    pub result: F,
}

/// Evaluates the formula in its fixed order: the conjunction of B and C,
/// its negation, then the implication from A.
pub fn evaluate<F: Float>(a: F, b: F, c: F) -> Evaluation<F> {
    let conjunction = ops::and(b, c);
    let negation = ops::not(conjunction);
    let result = ops::implication(a, negation);

    Evaluation {
        conjunction,
        negation,
        result,
    }
}

/// Evaluates the formula while writing one trace line per operator
/// application, each naming the operator, its operands, and its result.
pub fn evaluate_traced<F, W>(a: F, b: F, c: F, out: &mut W) -> io::Result<Evaluation<F>>
where
    F: Float + Display,
    W: Write,
{
    let conjunction = ops::and(b, c);
    writeln!(out, "(B AND C) = min({b}, {c}) = {conjunction}")?;

    let negation = ops::not(conjunction);
    writeln!(out, "NOT(B AND C) = 1 - {conjunction} = {negation}")?;

    let result = ops::implication(a, negation);
    writeln!(out, "A IMPLIES NOT(B AND C) = max(1 - {a}, {negation}) = {result}")?;

    Ok(Evaluation {
        conjunction,
        negation,
        result,
    })
}

#[test]
fn test_worked_example() {
    let evaluation = evaluate(0.8, 0.6, 0.3);

    assert_eq!(evaluation.conjunction, 0.3);
    assert_eq!(evaluation.negation, 0.7);
    assert_eq!(evaluation.result, 0.7);
}

#[test]
fn test_boundary_inputs() {
    assert_eq!(evaluate(1.0, 1.0, 1.0).result, 0.0);
    assert_eq!(evaluate(0.0, 0.0, 0.0).result, 1.0);
    assert_eq!(evaluate(0.5, 0.5, 0.5).result, 0.5);
}

#[test]
fn test_traced_matches_plain_evaluation() {
    let mut out = Vec::new();
    let traced = evaluate_traced(0.9, 0.2, 0.1, &mut out).unwrap();

    assert_eq!(traced, evaluate(0.9, 0.2, 0.1));
}

#[test]
fn test_trace_lines() {
    let mut out = Vec::new();
    let evaluation = evaluate_traced(0.8, 0.6, 0.3, &mut out).unwrap();
    let trace = String::from_utf8(out).unwrap();

    assert_eq!(evaluation.result, 0.7);
    assert_eq!(
        trace,
        "(B AND C) = min(0.6, 0.3) = 0.3\n\
         NOT(B AND C) = 1 - 0.3 = 0.7\n\
         A IMPLIES NOT(B AND C) = max(1 - 0.8, 0.7) = 0.7\n"
    );
}
