//! Scanner behaviour over whole inputs.

mod common;

use common::{assert_report, count, report};
use stalex::{DiagnosticKind, Keyword, TokenKind, render, tokenize};

// -----------------------------------------------------------
// Basic token stream.
// -----------------------------------------------------------

#[test]
fn lex_empty_input() {
    assert!(tokenize("").is_empty());
}

#[test]
fn lex_only_whitespace() {
    assert!(tokenize("   \t  \n\n  ").is_empty());
}

#[test]
fn lex_declaration() {
    assert_report(
        "int x is 5.",
        &[
            "Keyword(int)",
            "Identifier(x)",
            "Keyword(is)",
            "IntConst(5)",
            "EndOfLine",
        ],
    );
}

#[test]
fn lex_all_keywords() {
    let records = tokenize("int text is loop times read write newLine");
    let keywords: Vec<_> = records
        .iter()
        .filter_map(|r| match r.token_kind() {
            Some(TokenKind::Keyword(kw)) => Some(*kw),
            _ => None,
        })
        .collect();
    assert_eq!(keywords, Keyword::ALL);
}

#[test]
fn lex_keyword_case_matters() {
    assert_report("Int newline", &["Identifier(Int)", "Identifier(newline)"]);
}

#[test]
fn lex_loop_block() {
    let input = "\
loop 3 times {
    write \"hi\", x.
    newLine.
}
";
    assert_report(
        input,
        &[
            "Keyword(loop)",
            "IntConst(3)",
            "Keyword(times)",
            "LeftCurlyBracket",
            "Keyword(write)",
            "String(\"hi\")",
            "Comma",
            "Identifier(x)",
            "EndOfLine",
            "Keyword(newLine)",
            "EndOfLine",
            "RightCurlyBracket",
        ],
    );
}

#[test]
fn lex_arithmetic() {
    assert_report(
        "x is y*2+z/4 - 1.",
        &[
            "Identifier(x)",
            "Keyword(is)",
            "Identifier(y)",
            "Operator(*)",
            "IntConst(2)",
            "Operator(+)",
            "Identifier(z)",
            "Operator(/)",
            "IntConst(4)",
            "Operator(-)",
            "IntConst(1)",
            "EndOfLine",
        ],
    );
}

#[test]
fn lex_crlf_line_endings() {
    assert_report(
        "read x.\r\nwrite x.\r\n",
        &[
            "Keyword(read)",
            "Identifier(x)",
            "EndOfLine",
            "Keyword(write)",
            "Identifier(x)",
            "EndOfLine",
        ],
    );
}

// -----------------------------------------------------------
// Diagnostics.
// -----------------------------------------------------------

#[test]
fn lex_identifier_too_long() {
    let records = tokenize("abcdefghijk");
    assert_eq!(records.len(), 1);
    assert_eq!(count(&records, DiagnosticKind::IdentifierTooLong), 1);
}

#[test]
fn lex_long_keyword_prefix_is_still_too_long() {
    assert_report("newLinexxxxx.", &["Error: Identifier too long.", "EndOfLine"]);
}

#[test]
fn lex_negative_integer() {
    let records = tokenize("-5");
    assert_eq!(records.len(), 1);
    assert_eq!(count(&records, DiagnosticKind::NegativeInteger), 1);
}

#[test]
fn lex_minus_glued_to_digit_is_negative_integer() {
    assert_report(
        "x is 4-1.",
        &[
            "Identifier(x)",
            "Keyword(is)",
            "IntConst(4)",
            "Error: Negative integer.",
            "EndOfLine",
        ],
    );
}

#[test]
fn lex_vertical_tab_is_whitespace() {
    assert_eq!(render(&tokenize("a\x0Bb")), "Identifier(a)\nIdentifier(b)\n");
}

#[test]
fn lex_negative_integer_in_expression() {
    assert_report(
        "x is 3 -42.",
        &[
            "Identifier(x)",
            "Keyword(is)",
            "IntConst(3)",
            "Error: Negative integer.",
            "EndOfLine",
        ],
    );
}

#[test]
fn lex_negative_long_integer_is_one_diagnostic() {
    assert_report("-1234567890", &["Error: Negative integer."]);
}

#[test]
fn lex_integer_too_long() {
    assert_report(
        "int n is 123456789.",
        &[
            "Keyword(int)",
            "Identifier(n)",
            "Keyword(is)",
            "Error: Integer too long.",
            "EndOfLine",
        ],
    );
}

#[test]
fn lex_unclosed_string() {
    assert_report(
        "write \"oops.\nwrite x.",
        &[
            "Keyword(write)",
            "Error: Unclosed string.",
            "Keyword(write)",
            "Identifier(x)",
            "EndOfLine",
        ],
    );
}

#[test]
fn lex_string_contains_double_quotes() {
    assert_report(
        "write \"a\"b\".",
        &[
            "Keyword(write)",
            "String(\"a\")",
            "Error: String contains double quotes.",
            "Identifier(b)",
            "Error: Unclosed string.",
        ],
    );
}

#[test]
fn lex_quote_on_next_line_does_not_flag_string() {
    let lines = report("write \"a\".\nwrite \"b\".");
    assert!(!lines.iter().any(|l| l.contains("double quotes")));
}

#[test]
fn lex_string_too_long() {
    let input = format!("write \"{}\" x.", "s".repeat(300));
    assert_report(
        &input,
        &[
            "Keyword(write)",
            "Error: String too long.",
            "Identifier(x)",
            "EndOfLine",
        ],
    );
}

#[test]
fn lex_comment_inside_string_is_stripped() {
    assert_report("\"a /* b */ c\"", &["String(\"a  c\")"]);
}

#[test]
fn lex_unrecognized_tokens() {
    assert_report(
        "x = 1; y",
        &[
            "Identifier(x)",
            "Error: Unrecognized token.",
            "IntConst(1)",
            "Error: Unrecognized token.",
            "Identifier(y)",
        ],
    );
}

#[test]
fn lex_diagnostics_do_not_stop_run() {
    let lines = report("@@@\nint y.");
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[3..], ["Keyword(int)", "Identifier(y)", "EndOfLine"]);
}

// -----------------------------------------------------------
// Spans.
// -----------------------------------------------------------

#[test]
fn lex_span_tracking() {
    let records = tokenize("a\n  b c");
    assert_eq!(records[0].span().line, 1);
    assert_eq!(records[0].span().column, 1);
    assert_eq!(records[1].span().line, 2);
    assert_eq!(records[1].span().column, 3);
    assert_eq!(records[2].span().column, 5);
}

#[test]
fn lex_deterministic() {
    let input = "int x is 5.\n/* c */ write \"s\" -3 abcdefghijkl\n/* open";
    let first = stalex::render(&tokenize(input));
    let second = stalex::render(&tokenize(input));
    assert_eq!(first, second);
}
