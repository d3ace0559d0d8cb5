/// Length bounds enforced while scanning.
///
/// These are language rules, not buffer sizes: a lexeme that exceeds
/// one is reported and dropped rather than truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Longest identifier or keyword, in characters.
    pub identifier: usize,
    /// Longest integer constant, in digits.
    pub integer: usize,
    /// Longest string literal, counting the opening quote and body.
    pub string: usize,
    /// Physical line bound. Longer lines are split into chunks of
    /// `line - 1` characters.
    pub line: usize,
}

impl Limits {
    pub const MAX_IDENTIFIER: usize = 10;
    pub const MAX_INTEGER: usize = 8;
    pub const MAX_STRING: usize = 256;
    pub const MAX_LINE: usize = 1024;

    /// Largest number of characters delivered as one line.
    #[must_use]
    pub const fn chunk_len(&self) -> usize {
        if self.line > 1 { self.line - 1 } else { 1 }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            identifier: Self::MAX_IDENTIFIER,
            integer: Self::MAX_INTEGER,
            string: Self::MAX_STRING,
            line: Self::MAX_LINE,
        }
    }
}
