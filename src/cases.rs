use tracing::debug;

use crate::eval::{self, Evaluation};

/// The fixed demonstration inputs, covering boundary degrees and midpoints
/// as well as mixed magnitudes.
pub const TEST_CASES: [(f64, f64, f64); 10] = [
    (0.1, 0.2, 0.3),
    (0.9, 0.8, 0.7),
    (0.5, 0.5, 0.5),
    (1.0, 1.0, 1.0),
    (0.0, 0.0, 0.0),
    (0.9, 0.2, 0.1),
    (0.2, 0.9, 0.8),
    (0.8, 0.6, 0.3),
    (0.7, 0.1, 0.9),
    (0.3, 1.0, 0.5),
];

/// One table row: 1-based index, the input triple, and the derived values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResultRow {
    pub index: usize,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub evaluation: Evaluation<f64>,
}

/// Runs every fixed case through the formula pipeline.
pub fn evaluate_all() -> Vec<ResultRow> {
    TEST_CASES
        .iter()
        .enumerate()
        .map(|(i, &(a, b, c))| {
            let evaluation = eval::evaluate(a, b, c);

            debug!(
                row = i + 1,
                a,
                b,
                c,
                conjunction = evaluation.conjunction,
                negation = evaluation.negation,
                result = evaluation.result,
                "evaluated case"
            );

            ResultRow {
                index: i + 1,
                a,
                b,
                c,
                evaluation,
            }
        })
        .collect()
}

#[test]
fn test_row_count_and_indices() {
    let rows = evaluate_all();

    assert_eq!(rows.len(), 10);

    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.index, i + 1);
    }
}

#[test]
fn test_rows_match_single_case_evaluation() {
    for row in evaluate_all() {
        assert_eq!(row.evaluation, eval::evaluate(row.a, row.b, row.c));
    }
}

#[test]
fn test_worked_example_row() {
    let rows = evaluate_all();
    let row = rows.iter().find(|r| (r.a, r.b, r.c) == (0.8, 0.6, 0.3)).unwrap();

    assert_eq!(row.evaluation.conjunction, 0.3);
    assert_eq!(row.evaluation.negation, 0.7);
    assert_eq!(row.evaluation.result, 0.7);
}
