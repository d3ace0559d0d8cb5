//! Block comment stripping across lines.

const OPEN: &str = "/*";
const CLOSE: &str = "*/";

/// Whether a block comment is open, carried from line to line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentState {
    open: bool,
    opened_here: bool,
}

impl CommentState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            opened_here: false,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Open, and the region started on an earlier line than the one
    /// currently being processed.
    #[must_use]
    pub const fn is_carried(&self) -> bool {
        self.open && !self.opened_here
    }

    pub(crate) const fn close(&mut self) {
        self.open = false;
        self.opened_here = false;
    }

    const fn open_here(&mut self) {
        self.open = true;
        self.opened_here = true;
    }
}

/// Outcome of stripping one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    /// The line holds code to scan, possibly empty.
    Code,
    /// The whole line sat inside an open comment.
    Consumed,
}

/// Remove comment text from `line`, updating `state`.
///
/// Closed comments are cut out in place. An opener without a closer on
/// the same line truncates the line there and leaves `state` open; only
/// one region can start per line that way.
pub fn strip_comments(line: &mut String, state: &mut CommentState) -> Strip {
    // Anything opened on an earlier line is carried from here on.
    state.opened_here = false;

    if state.open {
        let Some(end) = line.find(CLOSE) else {
            line.clear();
            return Strip::Consumed;
        };
        line.replace_range(..end + CLOSE.len(), "");
        state.close();
        tracing::trace!("comment closed");
    }

    let mut from = 0;
    while let Some(rel) = line[from..].find(OPEN) {
        let start = from + rel;
        let body = start + OPEN.len();
        match line[body..].find(CLOSE) {
            Some(rel_end) => {
                line.replace_range(start..body + rel_end + CLOSE.len(), "");
                from = start;
            }
            None => {
                line.truncate(start);
                state.open_here();
                tracing::trace!(column = start + 1, "comment opened");
                break;
            }
        }
    }

    Strip::Code
}
