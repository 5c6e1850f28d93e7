use std::fmt::{Display, Formatter};

/// A 1-based line/column pair, the human-readable counterpart to a byte
/// offset into the source.
///
/// Shaped after the teacher crate's `util::Position`, but without its
/// `util::Code` companion's cached line-break index: `Code` amortizes
/// repeated lookups across a long-lived parse tree, while a [`crate::parse`]
/// call surfaces at most one error, so [`Position::of`] just scans once and
/// there's nothing to amortize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub(crate) fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Compute the position of `offset` within `source` by scanning for
    /// line breaks once. Prefer [`crate::Document::error_line`] plus this
    /// function only when a column is also needed for display.
    ///
    /// Counts `\r` and `\n` as a line break each, matching the tokenizer's
    /// own line counter (`src/parser/mod.rs`'s `\r | \n` row increments
    /// `line` on either byte, so a CRLF pair counts as two breaks, not one).
    /// Using a CRLF-aware single-break rule here would disagree with
    /// [`crate::Document::error_line`] on such input.
    pub fn of(source: &[u8], offset: usize) -> Position {
        let offset = offset.min(source.len());
        let mut line = 0usize;
        let mut last_break = None;
        for (i, &b) in source[..offset].iter().enumerate() {
            if b == b'\r' || b == b'\n' {
                line += 1;
                last_break = Some(i);
            }
        }
        let column_start = last_break.map_or(0, |i| i + 1);
        Position::new(line + 1, offset - column_start + 1)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_first_line() {
        assert_eq!(Position::of(b"abc", 0), Position::new(1, 1));
    }

    #[test]
    fn advances_line_on_newline() {
        assert_eq!(Position::of(b"ab\ncd", 4), Position::new(2, 2));
    }

    #[test]
    fn counts_multiple_newlines() {
        assert_eq!(Position::of(b"a\nb\nc", 4), Position::new(3, 1));
    }

    #[test]
    fn carriage_return_counts_as_a_line_break_too() {
        // Matches the tokenizer's own `\r | \n` line counter, so `Position::of`
        // agrees with `Document::error_line` on CR- or CRLF-terminated input.
        assert_eq!(Position::of(b"ab\rcd", 4), Position::new(2, 2));
        assert_eq!(Position::of(b"a\r\nb", 3), Position::new(3, 1));
    }
}
