//! Per-line character scanner.
//!
//! Classifies the characters of one comment-stripped line into tokens
//! and diagnostics, left to right. Every branch of the main loop
//! consumes at least one character, so a line always terminates.

use crate::comment::CommentState;
use crate::limits::Limits;
use crate::report::{Diagnostic, DiagnosticKind, Sink};
use crate::token::{Keyword, Operator, Span, Token, TokenKind};

/// Classify a complete word as a keyword or identifier.
///
/// # Errors
///
/// Returns `InvalidIdentifier` if the word does not start with an ASCII
/// letter, `IdentifierTooLong` if it is longer than `max_len`.
pub fn classify_word(word: &str, max_len: usize) -> Result<TokenKind, DiagnosticKind> {
    if !word.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(DiagnosticKind::InvalidIdentifier);
    }
    if word.chars().count() > max_len {
        return Err(DiagnosticKind::IdentifierTooLong);
    }
    Ok(Keyword::lookup(word).map_or_else(
        || TokenKind::Identifier(word.to_string()),
        TokenKind::Keyword,
    ))
}

/// Whitespace as the C locale's `isspace` sees it, vertical tab and
/// form feed included.
const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scans lines under a fixed set of limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScanner {
    limits: Limits,
}

impl LineScanner {
    #[must_use]
    pub const fn new(limits: Limits) -> Self {
        Self { limits }
    }

    /// Scan one line, emitting a record for every lexeme.
    ///
    /// If `comments` holds a region carried in from an earlier line, the
    /// line is taken to be unstripped: scanning starts after its first
    /// `*/` (closing the region), and a line without one emits nothing.
    pub fn scan_line<S: Sink + ?Sized>(
        &self,
        line: &str,
        line_number: usize,
        comments: &mut CommentState,
        sink: &mut S,
    ) {
        let mut start = 0;
        if comments.is_carried() {
            let Some(end) = line.find("*/") else {
                return;
            };
            comments.close();
            start = line[..end + 2].chars().count();
        }

        let chars: Vec<char> = line.chars().collect();
        LineCursor {
            chars: &chars,
            pos: start,
            line: line_number,
            limits: &self.limits,
            sink,
        }
        .run();
    }
}

struct LineCursor<'a, S: ?Sized> {
    chars: &'a [char],
    pos: usize,
    line: usize,
    limits: &'a Limits,
    sink: &'a mut S,
}

impl<S: Sink + ?Sized> LineCursor<'_, S> {
    fn run(mut self) {
        loop {
            self.eat_while(is_space);
            let Some(ch) = self.peek() else {
                break;
            };
            let before = self.pos;

            if let Some(op) = Operator::from_char(ch) {
                if ch == '-' && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.read_negative_integer();
                } else {
                    self.single(TokenKind::Operator(op));
                }
                continue;
            }

            match ch {
                '.' => self.single(TokenKind::EndOfLine),
                ',' => self.single(TokenKind::Comma),
                '{' => self.single(TokenKind::LeftBrace),
                '}' => self.single(TokenKind::RightBrace),
                c if c.is_ascii_alphabetic() => self.read_word(),
                c if c.is_ascii_digit() => self.read_integer(),
                '"' => self.read_string(),
                _ => {
                    self.diagnostic(DiagnosticKind::UnrecognizedToken, self.pos);
                    self.pos += 1;
                }
            }

            debug_assert!(self.pos > before, "scanner stalled at column {before}");
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
    }

    const fn span_at(&self, pos: usize) -> Span {
        Span {
            line: self.line,
            column: pos + 1,
        }
    }

    fn token(&mut self, kind: TokenKind, start: usize) {
        let span = self.span_at(start);
        self.sink.emit(Token { kind, span }.into());
    }

    fn diagnostic(&mut self, kind: DiagnosticKind, start: usize) {
        let span = self.span_at(start);
        self.sink.emit(Diagnostic { kind, span }.into());
    }

    fn text(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    fn single(&mut self, kind: TokenKind) {
        self.token(kind, self.pos);
        self.pos += 1;
    }

    fn read_negative_integer(&mut self) {
        let start = self.pos;
        self.pos += 1; // skip '-'
        self.eat_while(|c| c.is_ascii_digit());
        self.diagnostic(DiagnosticKind::NegativeInteger, start);
    }

    fn read_word(&mut self) {
        let start = self.pos;
        self.eat_while(is_word_char);
        let word = self.text(start, self.pos);
        match classify_word(&word, self.limits.identifier) {
            Ok(kind) => self.token(kind, start),
            Err(kind) => self.diagnostic(kind, start),
        }
    }

    fn read_integer(&mut self) {
        let start = self.pos;
        self.eat_while(|c| c.is_ascii_digit());
        if self.pos - start > self.limits.integer {
            self.diagnostic(DiagnosticKind::IntegerTooLong, start);
        } else {
            let digits = self.text(start, self.pos);
            self.token(TokenKind::Integer(digits), start);
        }
    }

    fn read_string(&mut self) {
        let start = self.pos;
        self.pos += 1; // skip opening quote

        // Opening quote counts towards the limit, the closing one does not.
        let mut length = 1;
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            length += 1;
            if length > self.limits.string {
                self.diagnostic(DiagnosticKind::StringTooLong, start);
                self.eat_while(|c| c != '"');
                if self.peek() == Some('"') {
                    self.pos += 1;
                }
                return;
            }
            self.pos += 1;
        }

        if self.peek() != Some('"') {
            self.diagnostic(DiagnosticKind::UnclosedString, start);
            return;
        }

        self.pos += 1; // closing quote
        let text = self.text(start, self.pos);
        self.token(TokenKind::String(text), start);

        if self.chars[self.pos..].contains(&'"') {
            self.diagnostic(DiagnosticKind::StringContainsDoubleQuotes, start);
        }
    }
}
