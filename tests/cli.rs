use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_runs_with_no_arguments() {
    Command::cargo_bin("fuzzy-truth")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("Input truth degrees: A=0.8, B=0.6, C=0.3"))
        .stdout(predicate::str::contains("Final truth degree of f9: 0.7"));
}

#[test]
fn test_prints_each_trace_step() {
    Command::cargo_bin("fuzzy-truth")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("(B AND C) = min(0.6, 0.3) = 0.3"))
        .stdout(predicate::str::contains("NOT(B AND C) = 1 - 0.3 = 0.7"))
        .stdout(predicate::str::contains(
            "A IMPLIES NOT(B AND C) = max(1 - 0.8, 0.7) = 0.7",
        ));
}

#[test]
fn test_prints_all_ten_table_rows() {
    let output = Command::cargo_bin("fuzzy-truth").unwrap().output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let content_lines = stdout.lines().filter(|line| line.starts_with('│')).count();

    // table header plus ten result rows
    assert_eq!(content_lines, 11);
    assert!(stdout.contains("B AND C"));
    assert!(stdout.contains("NOT(B AND C)"));
    assert!(stdout.contains("f9"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("fuzzy-truth")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fuzzy-truth"));
}
