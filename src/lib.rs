//! A compact, allocation-free JSON5 tokenizer and shallow DOM accessor.
//!
//! # Overview
//!
//! A JSON5 document is rarely worth building a heap-allocated tree for when
//! all a host wants is to read a handful of fields out of a config blob or a
//! protocol handshake. This crate takes the opposite approach from a typical
//! `serde_json::Value`: the caller owns a fixed-size [`Token`] buffer, and
//! [`parse`] fills it in a single forward pass over the input bytes. Nothing
//! is copied out of the source text — every token is a `start..end` byte
//! span into the buffer the caller already owns.
//!
//! The [`accessor`] module then gives you JSON-pointer-ish navigation
//! ([`seek`](accessor::seek), [`seek_recursive`](accessor::seek_recursive),
//! [`array_elem`](accessor::array_elem)) and scalar coercion
//! ([`get_i64`](accessor::get_i64), [`get_bool`](accessor::get_bool), ...)
//! over the filled buffer, without ever allocating.
//!
//! # Example
//!
//! ```
//! use json5lite::{parse, Token, TokenKind};
//! use json5lite::accessor::{seek, get_u32};
//!
//! let source = b"{ name: 'door', hp: 12, locked: true }";
//! let mut tokens = [Token::EMPTY; 16];
//! let doc = parse(source, &mut tokens);
//!
//! assert!(doc.error.is_none());
//! assert_eq!(doc.tokens()[0].kind, TokenKind::Object);
//!
//! let hp = seek(&doc, 0, b"hp").unwrap();
//! assert_eq!(get_u32(&doc, hp).unwrap(), 12);
//! ```
//!
//! # Scope
//!
//! Out of scope, by design: pretty-printing, JSON5 emission, Unicode
//! normalization beyond rejecting control bytes, schema validation, chunked
//! (streaming) input, and a mutable DOM. See each module's documentation for
//! the parts of JSON5 it does and does not accept.

mod classify;
mod error;
mod hash;
mod parser;
mod position;
mod token;

pub mod accessor;

pub use accessor::AccessError;
pub use error::ParseError;
pub use parser::{parse, parse_len};
pub use position::Position;
pub use token::{NumberKind, Token, TokenAux, TokenKind};

/// The result of [`parse`]: a borrowed view over the caller's token buffer
/// and the source bytes it was built from.
///
/// A `Document` never allocates and never outlives the `source`/`tokens`
/// buffers it borrows. On success, `tokens()` is a flat, depth-first,
/// left-to-right listing of every JSON5 construct in `source` (see the
/// invariants documented on [`Token`]). On failure, `tokens()` is still
/// indexable up to `num_tokens`, but the partial tree it describes is not
/// guaranteed to be well-formed — callers must check [`Document::error`]
/// before using any accessor in [`accessor`].
pub struct Document<'a> {
    /// `None` on success; otherwise the first error encountered.
    pub error: Option<ParseError>,
    /// 0-based line at which `error` occurred. Meaningless when `error` is `None`.
    pub error_line: usize,
    /// Byte offset into `source` at which `error` occurred. Meaningless when `error` is `None`.
    pub error_pos: usize,
    num_tokens: usize,
    tokens: &'a [Token],
    source: &'a [u8],
}

impl<'a> Document<'a> {
    /// The tokens produced before parsing stopped (all of them, on success).
    pub fn tokens(&self) -> &'a [Token] {
        &self.tokens[..self.num_tokens]
    }

    /// Number of tokens produced. Equal to `tokens().len()`.
    pub fn num_tokens(&self) -> usize {
        self.num_tokens
    }

    /// The source bytes this document was parsed from.
    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// Raw byte span of a token's source text.
    ///
    /// For strings this excludes the surrounding quotes; for numbers the
    /// `0x` prefix (if any) is already excluded from the stored span; for
    /// containers it spans from the opening to the matching closing bracket.
    pub fn span(&self, id: usize) -> &'a [u8] {
        let t = &self.tokens[id];
        &self.source[t.start..t.end]
    }
}
