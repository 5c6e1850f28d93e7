use std::fmt::{Display, Formatter};

/// Why a read-side accessor call failed. Distinct from [`crate::ParseError`]:
/// these arise only after a successful parse, when a caller asks an
/// accessor to treat a token as something its `kind` doesn't support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The token's `kind` doesn't match what the accessor expects (e.g.
    /// calling [`crate::accessor::get_bool`] on a `String` token).
    WrongKind,
    /// The token's `kind` matched, but its span didn't parse as the
    /// requested scalar (this should not happen for tokens produced by
    /// [`crate::parse`] itself, since the tokenizer only ever emits spans
    /// it has already validated; it guards callers who hand-construct or
    /// otherwise obtain a [`crate::Token`] from elsewhere).
    Malformed,
}

impl Display for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            AccessError::WrongKind => "token kind does not support this accessor",
            AccessError::Malformed => "token span did not parse as the requested scalar",
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for AccessError {}
