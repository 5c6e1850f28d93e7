/// Sentinel for a container's `end` while it is still open. No real span
/// ever reaches this value since `end <= source.len()`.
pub(crate) const UNCLOSED: usize = usize::MAX;

/// The lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Object,
    Array,
    Number,
    String,
    Bool,
    Null,
}

impl TokenKind {
    pub(crate) fn is_container(self) -> bool {
        matches!(self, TokenKind::Object | TokenKind::Array)
    }
}

/// Number subtype, distinguished at scan time so accessors don't need to
/// re-inspect the source span to know how to parse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Int,
    Float,
    Hex,
}

/// The part of a [`Token`] whose meaning depends on `kind`.
///
/// This is the tagged-union replacement for `cj5_token`'s anonymous C union
/// of `num_type`/`key_hash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenAux {
    /// `kind` is neither `Number` nor a key `String`.
    None,
    /// `kind == Number`.
    Number(NumberKind),
    /// `kind == String` and this string is a bound object key (its `size`
    /// is 1). The FNV-1a hash of its span, used by [`crate::accessor::seek`].
    KeyHash(u32),
}

impl TokenAux {
    pub(crate) fn number_kind(self) -> Option<NumberKind> {
        match self {
            TokenAux::Number(k) => Some(k),
            _ => None,
        }
    }

    pub(crate) fn key_hash(self) -> Option<u32> {
        match self {
            TokenAux::KeyHash(h) => Some(h),
            _ => None,
        }
    }
}

/// A single node of the flat, index-linked parse tree.
///
/// See the crate-level invariants: tokens are stored in source order, a
/// parent's index is always less than any descendant's, and a container's
/// `size` always equals the number of tokens whose `parent` equals its own
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte offset into the source where this token's span begins (see
    /// [`crate::Document::span`] for exactly what the span covers per kind).
    pub start: usize,
    pub end: usize,
    /// Number of direct children. For a bound key, `size == 1`. For a
    /// scalar leaf (`Number`/`Bool`/`Null`), always `0`.
    pub size: u32,
    /// `None` for the root token; otherwise the index of the enclosing
    /// container, or the index of the key this token is the bound value of.
    pub parent: Option<usize>,
    pub aux: TokenAux,
}

impl Token {
    /// A placeholder token suitable for initializing a caller's buffer
    /// (`[Token::EMPTY; N]`). [`crate::parse`] overwrites every slot it uses;
    /// this value is never observed in a successful [`crate::Document`].
    pub const EMPTY: Token = Token {
        kind: TokenKind::Null,
        start: 0,
        end: 0,
        size: 0,
        parent: None,
        aux: TokenAux::None,
    };

    pub(crate) fn is_open(&self) -> bool {
        self.kind.is_container() && self.end == UNCLOSED
    }
}
