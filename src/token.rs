use std::fmt;

/// Source location for a token or diagnostic.
///
/// `column` counts characters in the comment-stripped line, so it can
/// drift from the raw source when a comment was removed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Reserved words of the language. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Int,
    Text,
    Is,
    Loop,
    Times,
    Read,
    Write,
    NewLine,
}

impl Keyword {
    pub const ALL: [Self; 8] = [
        Self::Int,
        Self::Text,
        Self::Is,
        Self::Loop,
        Self::Times,
        Self::Read,
        Self::Write,
        Self::NewLine,
    ];

    /// Look up a word in the keyword set.
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == word)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Text => "text",
            Self::Is => "is",
            Self::Loop => "loop",
            Self::Times => "times",
            Self::Read => "read",
            Self::Write => "write",
            Self::NewLine => "newLine",
        }
    }
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Operator {
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
        }
    }
}

/// Token kinds produced by the scanner, with their payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Name that is not a keyword.
    Identifier(String),
    /// Reserved word.
    Keyword(Keyword),
    /// One of `+ - * /`.
    Operator(Operator),
    /// Double-quoted literal, quotes included.
    String(String),
    /// Unsigned decimal digits.
    Integer(String),
    /// Statement terminator `.`.
    EndOfLine,
    /// `,`
    Comma,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
}

/// A single token with its kind and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "Identifier({name})"),
            Self::Keyword(kw) => write!(f, "Keyword({})", kw.as_str()),
            Self::Operator(op) => write!(f, "Operator({})", op.as_char()),
            Self::String(text) => write!(f, "String({text})"),
            Self::Integer(digits) => write!(f, "IntConst({digits})"),
            Self::EndOfLine => f.write_str("EndOfLine"),
            Self::Comma => f.write_str("Comma"),
            Self::LeftBrace => f.write_str("LeftCurlyBracket"),
            Self::RightBrace => f.write_str("RightCurlyBracket"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
