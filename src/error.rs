use std::fmt::{Display, Formatter};

/// The closed error taxonomy of spec §7: tokenizing either succeeds or
/// stops at the first malformed construct with one of these four kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Control byte in a primitive, non-identifier byte in a bare key, a
    /// second `.` in a number, a bracket that closes the wrong container
    /// kind, or a stray `}`/`]` with nothing open to close.
    Invalid,
    /// End of input inside a string, inside a primitive, or with containers
    /// still open.
    Incomplete,
    /// The token buffer was full when a token needed to be allocated.
    Overflow,
    /// An unknown `\x` escape, or `\u` not followed by four hex digits.
    InvalidEscape,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ParseError::Invalid => "malformed JSON5 input",
            ParseError::Incomplete => "unexpected end of input",
            ParseError::Overflow => "token buffer exhausted",
            ParseError::InvalidEscape => "invalid string escape sequence",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for ParseError {}
