//! Lexical analyzer for the STA instructional language.
//!
//! Source is processed line by line: block comments (`/* ... */`, which
//! may span lines) are stripped first, then each line is scanned into a
//! flat stream of tokens and diagnostics. Diagnostics never stop the
//! run; the scanner reports the malformed lexeme and resumes at the next
//! character.
//!
//! # Quick start
//!
//! ## Tokenize a string
//!
//! ```
//! use stalex::{render, tokenize};
//!
//! let records = tokenize("int x is 5.\n");
//! assert_eq!(
//!     render(&records),
//!     "Keyword(int)\nIdentifier(x)\nKeyword(is)\nIntConst(5)\nEndOfLine\n"
//! );
//! ```
//!
//! ## Stream a report
//!
//! ```
//! use stalex::{Limits, analyze};
//!
//! let source = "text a /* note\n still note */ is \"ok\".\n";
//! let mut report = Vec::new();
//! let summary = analyze(source.as_bytes(), &mut report, Limits::default()).unwrap();
//! assert_eq!(summary.diagnostics, 0);
//! assert!(String::from_utf8(report).unwrap().ends_with("String(\"ok\")\nEndOfLine\n"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::io;
use std::path::PathBuf;

pub mod comment;
pub mod lexer;
pub mod limits;
pub mod report;
pub mod scanner;
pub mod source;
pub mod token;

pub use comment::{CommentState, Strip, strip_comments};
pub use lexer::{Lexer, Summary, analyze, analyze_file, tokenize};
pub use limits::Limits;
pub use report::{Diagnostic, DiagnosticKind, Record, Sink, render};
pub use scanner::{LineScanner, classify_word};
pub use source::{SourceLine, SourceLines};
pub use token::{Keyword, Operator, Span, Token, TokenKind};

/// Failure that stops a run. Lexical problems are not errors; they are
/// reported as [`Diagnostic`] records.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be opened.
    #[error("could not open input file {}: {source}", .path.display())]
    OpenInput { path: PathBuf, source: io::Error },
    /// The report file could not be created.
    #[error("could not open output file {}: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
    /// Reading a source line failed.
    #[error("failed to read source: {0}")]
    Read(#[source] io::Error),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Write(#[source] io::Error),
}
