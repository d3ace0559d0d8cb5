//! Report records and the sink they are emitted into.
//!
//! A report is the ordered stream of tokens and diagnostics, one line
//! per record, in the order the scanner met them.

use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// Classifies a lexical diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Word that does not start with a letter.
    InvalidIdentifier,
    /// Identifier longer than the identifier limit.
    IdentifierTooLong,
    /// Integer constant longer than the integer limit.
    IntegerTooLong,
    /// String literal longer than the string limit.
    StringTooLong,
    /// Another `"` follows a closed string on the same line.
    StringContainsDoubleQuotes,
    /// String literal with no closing quote on its line.
    UnclosedString,
    /// Character that cannot start any token.
    UnrecognizedToken,
    /// `-` directly followed by a digit.
    NegativeInteger,
    /// Block comment still open at end of input.
    UnclosedComment,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InvalidIdentifier => "Invalid identifier",
            Self::IdentifierTooLong => "Identifier too long",
            Self::IntegerTooLong => "Integer too long",
            Self::StringTooLong => "String too long",
            Self::StringContainsDoubleQuotes => "String contains double quotes",
            Self::UnclosedString => "Unclosed string",
            Self::UnrecognizedToken => "Unrecognized token",
            Self::NegativeInteger => "Negative integer",
            Self::UnclosedComment => "Unclosed comment",
        };
        f.write_str(text)
    }
}

/// Diagnostic reported for a malformed lexeme.
///
/// Diagnostics are report records, not faults: scanning always
/// continues after one is emitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error: {kind}.")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
}

/// One line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Token(Token),
    Diagnostic(Diagnostic),
}

impl Record {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Token(token) => token.span,
            Self::Diagnostic(diag) => diag.span,
        }
    }

    #[must_use]
    pub const fn token_kind(&self) -> Option<&TokenKind> {
        match self {
            Self::Token(token) => Some(&token.kind),
            Self::Diagnostic(_) => None,
        }
    }

    #[must_use]
    pub const fn diagnostic_kind(&self) -> Option<DiagnosticKind> {
        match self {
            Self::Token(_) => None,
            Self::Diagnostic(diag) => Some(diag.kind),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(token) => token.fmt(f),
            Self::Diagnostic(diag) => diag.fmt(f),
        }
    }
}

impl From<Token> for Record {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl From<Diagnostic> for Record {
    fn from(diag: Diagnostic) -> Self {
        Self::Diagnostic(diag)
    }
}

/// Destination for records as they are produced.
pub trait Sink {
    fn emit(&mut self, record: Record);
}

impl Sink for Vec<Record> {
    fn emit(&mut self, record: Record) {
        self.push(record);
    }
}

/// Render records as report text, one `\n`-terminated line each.
#[must_use]
pub fn render(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}
