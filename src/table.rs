use comfy_table::{presets::UTF8_FULL, Table};

use crate::cases::ResultRow;

/// Renders the batch results, derived columns rounded to two decimal
/// places at this display boundary only.
pub fn render(rows: &[ResultRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "A", "B", "C", "B AND C", "NOT(B AND C)", "f9"]);

    for row in rows {
        table.add_row(vec![
            row.index.to_string(),
            row.a.to_string(),
            row.b.to_string(),
            row.c.to_string(),
            format!("{:.2}", row.evaluation.conjunction),
            format!("{:.2}", row.evaluation.negation),
            format!("{:.2}", row.evaluation.result),
        ]);
    }

    table
}

#[cfg(test)]
use crate::cases;

#[test]
fn test_header_and_ten_data_rows() {
    let rendered = render(&cases::evaluate_all()).to_string();
    let content_lines = rendered.lines().filter(|line| line.starts_with('│')).count();

    // header line plus the ten result rows
    assert_eq!(content_lines, 11);
}

#[test]
fn test_derived_cells_rounded_to_two_decimals() {
    let rendered = render(&cases::evaluate_all()).to_string();

    // NOT(0.9 ∧ 0.8) carries floating-point residue internally and must
    // still render as 0.30
    assert!(rendered.contains("0.30"));
    assert!(rendered.contains("0.70"));
    assert!(!rendered.contains("0.30000000000000004"));
}
