//! Line driver: feeds source lines through the comment stripper and the
//! scanner, and writes the resulting report.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::Error;
use crate::comment::{CommentState, Strip, strip_comments};
use crate::limits::Limits;
use crate::report::{Diagnostic, DiagnosticKind, Record, Sink};
use crate::scanner::LineScanner;
use crate::source::SourceLines;
use crate::token::Span;

/// Counts gathered over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines handed to the lexer, counting each chunk of a split line.
    pub lines: usize,
    pub tokens: usize,
    pub diagnostics: usize,
    /// Input ended inside a block comment.
    pub unclosed_comment: bool,
}

impl Summary {
    fn record(&mut self, record: &Record) {
        match record {
            Record::Token(_) => self.tokens += 1,
            Record::Diagnostic(_) => self.diagnostics += 1,
        }
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.diagnostics == 0
    }
}

/// Stateful driver over a sequence of lines.
///
/// Owns the comment state shared by the stripper and the scanner.
#[derive(Debug, Default)]
pub struct Lexer {
    scanner: LineScanner,
    comments: CommentState,
    last_line: usize,
}

impl Lexer {
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self {
            scanner: LineScanner::new(limits),
            comments: CommentState::new(),
            last_line: 0,
        }
    }

    #[must_use]
    pub const fn comments(&self) -> &CommentState {
        &self.comments
    }

    /// Process one raw line.
    ///
    /// Code in front of a comment left open on this line is still
    /// scanned; lines inside an open comment produce nothing.
    pub fn feed_line<S: Sink + ?Sized>(&mut self, line: &str, line_number: usize, sink: &mut S) {
        self.last_line = line_number;
        let mut text = line.to_string();
        let was_open = self.comments.is_open();

        if strip_comments(&mut text, &mut self.comments) == Strip::Consumed {
            tracing::trace!(line = line_number, "line inside comment");
            return;
        }
        if was_open && !self.comments.is_carried() {
            tracing::debug!(line = line_number, "block comment closed");
        }
        if self.comments.is_open() && !self.comments.is_carried() {
            tracing::debug!(line = line_number, "block comment opened");
        }

        self.scanner.scan_line(&text, line_number, &mut self.comments, sink);
    }

    /// End of input: reports a comment that never closed.
    pub fn finish<S: Sink + ?Sized>(self, sink: &mut S) {
        if self.comments.is_open() {
            tracing::debug!(line = self.last_line, "input ended inside comment");
            sink.emit(Record::Diagnostic(Diagnostic {
                kind: DiagnosticKind::UnclosedComment,
                span: Span {
                    line: self.last_line,
                    column: 1,
                },
            }));
        }
    }
}

/// Tokenize an in-memory source with the default limits.
///
/// Lines are split on `\n` (an optional `\r` before it is dropped) and
/// overlong lines are chunked the same way [`analyze`] does.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Record> {
    let limits = Limits::default();
    let mut lexer = Lexer::new(limits);
    let mut records: Vec<Record> = Vec::new();

    for line in SourceLines::new(input.as_bytes(), limits.chunk_len()) {
        // Reading from a `&str` cannot fail.
        let Ok(line) = line else { break };
        lexer.feed_line(&line.text, line.number, &mut records);
    }
    lexer.finish(&mut records);
    records
}

/// Sink that writes each record as a report line and keeps counts.
struct ReportWriter<W> {
    out: W,
    summary: Summary,
    error: Option<io::Error>,
}

impl<W: Write> Sink for ReportWriter<W> {
    fn emit(&mut self, record: Record) {
        self.summary.record(&record);
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{record}") {
            self.error = Some(e);
        }
    }
}

impl<W: Write> ReportWriter<W> {
    fn check(&mut self) -> Result<(), Error> {
        self.error.take().map_or(Ok(()), |e| Err(Error::Write(e)))
    }
}

/// Run the lexer over `reader`, writing the report to `writer`.
///
/// # Errors
///
/// Returns `Error::Read` if a line cannot be read (including invalid
/// UTF-8) and `Error::Write` if the report cannot be written. Lexical
/// problems are never errors; they appear in the report.
pub fn analyze<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    limits: Limits,
) -> Result<Summary, Error> {
    let mut lexer = Lexer::new(limits);
    let mut out = ReportWriter {
        out: writer,
        summary: Summary::default(),
        error: None,
    };

    for line in SourceLines::new(reader, limits.chunk_len()) {
        let line = line.map_err(Error::Read)?;
        out.summary.lines += 1;
        lexer.feed_line(&line.text, line.number, &mut out);
        out.check()?;
        out.out.flush().map_err(Error::Write)?;
    }

    out.summary.unclosed_comment = lexer.comments().is_open();
    lexer.finish(&mut out);
    out.check()?;
    out.out.flush().map_err(Error::Write)?;

    tracing::debug!(
        lines = out.summary.lines,
        tokens = out.summary.tokens,
        diagnostics = out.summary.diagnostics,
        "analysis complete"
    );
    Ok(out.summary)
}

/// Both paths name the same existing file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Tokenize the file at `input` and write the report to `output`.
///
/// The input is opened before the output is created; if either fails
/// nothing is tokenized and no report is written. An `output` that
/// resolves to the input file is refused, since creating it would
/// truncate the source.
///
/// # Errors
///
/// Returns `Error::OpenInput` or `Error::CreateOutput` when a file
/// cannot be acquired, otherwise as [`analyze`].
pub fn analyze_file(input: &Path, output: &Path, limits: Limits) -> Result<Summary, Error> {
    let source = File::open(input).map_err(|source| Error::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    if same_file(input, output) {
        return Err(Error::CreateOutput {
            path: output.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "output is the input file"),
        });
    }
    let report = File::create(output).map_err(|source| Error::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::debug!(input = %input.display(), output = %output.display(), "analyzing file");
    analyze(BufReader::new(source), BufWriter::new(report), limits)
}
