use std::collections::VecDeque;
use std::io::{self, BufRead};

/// One line handed to the lexer, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based physical line number.
    pub number: usize,
    pub text: String,
}

/// Reads lines from `reader`, splitting any line longer than
/// `chunk_len` characters into consecutive pieces that share its
/// line number.
pub struct SourceLines<R> {
    reader: R,
    chunk_len: usize,
    number: usize,
    pending: VecDeque<SourceLine>,
    done: bool,
}

impl<R: BufRead> SourceLines<R> {
    #[must_use]
    pub fn new(reader: R, chunk_len: usize) -> Self {
        Self {
            reader,
            chunk_len: chunk_len.max(1),
            number: 0,
            pending: VecDeque::new(),
            done: false,
        }
    }

    fn read_physical(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }

    fn split(&mut self, text: String) {
        if text.chars().count() <= self.chunk_len {
            self.pending.push_back(SourceLine {
                number: self.number,
                text,
            });
            return;
        }

        tracing::debug!(line = self.number, "splitting overlong line");
        let chars: Vec<char> = text.chars().collect();
        for piece in chars.chunks(self.chunk_len) {
            self.pending.push_back(SourceLine {
                number: self.number,
                text: piece.iter().collect(),
            });
        }
    }
}

impl<R: BufRead> Iterator for SourceLines<R> {
    type Item = io::Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }
        if self.done {
            return None;
        }
        match self.read_physical() {
            Ok(Some(text)) => {
                self.number += 1;
                self.split(text);
                self.pending.pop_front().map(Ok)
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
