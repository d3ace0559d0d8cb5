#![allow(dead_code)]

use stalex::{DiagnosticKind, Record, render, tokenize};

/// Report lines for `input`, without terminators.
pub fn report(input: &str) -> Vec<String> {
    tokenize(input).iter().map(ToString::to_string).collect()
}

/// Helper: assert the report for `input` is exactly `expected`.
pub fn assert_report(input: &str, expected: &[&str]) {
    let got = report(input);
    assert_eq!(
        got, expected,
        "report mismatch\n--- input ---\n{input}\n--- got ---\n{}",
        render(&tokenize(input))
    );
}

pub fn count(records: &[Record], kind: DiagnosticKind) -> usize {
    records
        .iter()
        .filter(|r| r.diagnostic_kind() == Some(kind))
        .count()
}
