mod primitive;
mod sink;
mod string;

use primitive::Primitive;
use sink::{BufSink, CountSink, Sink};

use crate::error::ParseError;
use crate::token::{Token, TokenKind, UNCLOSED};
use crate::{Document, TokenAux};

/// Parses `source` into `tokens`, per spec §4.1's main loop.
///
/// `tokens` is filled in source order, depth-first, left-to-right; a parent's
/// index is always lower than any of its descendants'. On
/// [`ParseError::Overflow`] or any other failure, `doc.tokens()` still
/// contains every token produced up to that point, but it may describe a
/// partially-built tree — check [`Document::error`] before calling into
/// [`crate::accessor`].
///
/// ```
/// use json5lite::{parse, Token, TokenKind};
///
/// let mut tokens = [Token::EMPTY; 4];
/// let doc = parse(b"[1, 2, 3]", &mut tokens);
/// assert!(doc.error.is_none());
/// assert_eq!(doc.tokens()[0].kind, TokenKind::Array);
/// ```
pub fn parse<'a>(source: &[u8], tokens: &'a mut [Token]) -> Document<'a> {
    let mut sink = BufSink { buf: tokens, len: 0 };
    let outcome = run(source, &mut sink);
    let num_tokens = sink.len;
    Document {
        error: outcome.error,
        error_line: outcome.error_line,
        error_pos: outcome.error_pos,
        num_tokens,
        tokens: sink.buf,
        source,
    }
}

/// Counts how many tokens `parse` would need for `source`, without storing
/// any of them — spec §4.4's capacity-counting pass. Validates the full
/// structure (bracket matching, key/value arity) just as a real parse would;
/// this is stricter than `cj5_parse(json5, len, NULL, 0)`, which skips
/// bracket-matching entirely when handed a null buffer (see DESIGN.md).
pub fn parse_len(source: &[u8]) -> Result<usize, ParseError> {
    let mut sink = CountSink::default();
    let outcome = run(source, &mut sink);
    match outcome.error {
        Some(e) => Err(e),
        None => Ok(sink.len()),
    }
}

struct Outcome {
    error: Option<ParseError>,
    error_line: usize,
    error_pos: usize,
}

/// Checked *before* allocating a new token: does attaching a child to
/// `parent_id` violate structure? The only two ways it can:
/// - There is no parent (this is a root-level token) and a root token has
///   already been produced (spec.md only ever describes one top-level
///   value).
/// - The parent is itself a bound object key (`kind == String`, `size >=
///   1`) — see SPEC_FULL.md §D, the `{a:1 b:2}` decision.
fn begin_attach<S: Sink>(sink: &S, parent_id: Option<usize>, root_seen: &mut bool) -> Result<(), ParseError> {
    match parent_id {
        None => {
            if *root_seen {
                return Err(ParseError::Invalid);
            }
            *root_seen = true;
            Ok(())
        }
        Some(pid) => {
            let parent = sink.get(pid);
            if parent.kind == TokenKind::String && parent.size >= 1 {
                return Err(ParseError::Invalid);
            }
            Ok(())
        }
    }
}

/// Called once a child has been allocated and stored: increments the
/// parent's `size` and, if the parent is a key becoming bound for the first
/// time inside an object, computes and stores its `KeyHash` (spec §9's
/// `parent.kind == Object` guard).
fn finalize_attach<S: Sink>(sink: &mut S, source: &[u8], parent_id: Option<usize>) {
    let pid = match parent_id {
        Some(pid) => pid,
        None => return,
    };
    let mut parent = sink.get(pid);
    parent.size += 1;
    let became_bound = parent.size == 1 && parent.kind == TokenKind::String;
    sink.set(pid, parent);
    if !became_bound {
        return;
    }
    let is_object_key = matches!(parent.parent, Some(gp) if sink.get(gp).kind == TokenKind::Object);
    if is_object_key {
        let hash = crate::hash::fnv1a32(&source[parent.start..parent.end]);
        let mut keyed = sink.get(pid);
        keyed.aux = TokenAux::KeyHash(hash);
        sink.set(pid, keyed);
    }
}

/// Walks up from `current` through `parent` links until it finds the
/// nearest still-open container, per spec §4.1's `}`/`]` row. Every
/// allocated token is visited at most once per close, since each walk stops
/// at the first open container it meets (an already-closed container is
/// never revisited by a later close — its own close already stopped there).
fn close_container<S: Sink>(sink: &mut S, pos: usize, want: TokenKind) -> Result<Option<usize>, ParseError> {
    if sink.len() == 0 {
        return Err(ParseError::Invalid);
    }
    let mut current = sink.len() - 1;
    loop {
        let t = sink.get(current);
        if t.is_open() {
            if t.kind != want {
                return Err(ParseError::Invalid);
            }
            let mut closed = t;
            closed.end = pos + 1;
            sink.set(current, closed);
            return Ok(closed.parent);
        }
        match t.parent {
            Some(p) => current = p,
            None => return Err(ParseError::Invalid),
        }
    }
}

fn run<S: Sink>(source: &[u8], sink: &mut S) -> Outcome {
    let len = source.len();
    let mut pos = 0usize;
    let mut line = 0usize;
    let mut can_comment = false;
    let mut root_seen = false;
    let mut super_id: Option<usize> = None;

    macro_rules! fail {
        ($kind:expr) => {
            return Outcome { error: $kind, error_line: line, error_pos: pos }
        };
    }

    while pos < len {
        match source[pos] {
            b'{' | b'[' => {
                can_comment = false;
                if let Err(e) = begin_attach(sink, super_id, &mut root_seen) {
                    fail!(Some(e));
                }
                let kind = if source[pos] == b'{' { TokenKind::Object } else { TokenKind::Array };
                let id = match sink.alloc() {
                    Ok(id) => id,
                    Err(e) => fail!(Some(e)),
                };
                sink.set(id, Token { kind, start: pos, end: UNCLOSED, size: 0, parent: super_id, aux: TokenAux::None });
                finalize_attach(sink, source, super_id);
                super_id = Some(id);
                pos += 1;
            }
            b'}' | b']' => {
                can_comment = false;
                let want = if source[pos] == b'}' { TokenKind::Object } else { TokenKind::Array };
                match close_container(sink, pos, want) {
                    Ok(parent) => super_id = parent,
                    Err(e) => fail!(Some(e)),
                }
                pos += 1;
            }
            b'"' | b'\'' => {
                can_comment = false;
                let (inner_start, inner_end, next_pos) = match string::scan(source, pos) {
                    Ok(v) => v,
                    Err(e) => fail!(Some(e)),
                };
                if let Err(e) = begin_attach(sink, super_id, &mut root_seen) {
                    fail!(Some(e));
                }
                let id = match sink.alloc() {
                    Ok(id) => id,
                    Err(e) => fail!(Some(e)),
                };
                sink.set(
                    id,
                    Token { kind: TokenKind::String, start: inner_start, end: inner_end, size: 0, parent: super_id, aux: TokenAux::None },
                );
                finalize_attach(sink, source, super_id);
                pos = next_pos;
            }
            b'\r' | b'\n' => {
                line += 1;
                can_comment = true;
                pos += 1;
            }
            b'\t' | b' ' => {
                pos += 1;
            }
            b':' => {
                can_comment = false;
                if sink.len() == 0 {
                    fail!(Some(ParseError::Invalid));
                }
                super_id = Some(sink.len() - 1);
                pos += 1;
            }
            b',' => {
                can_comment = false;
                if let Some(pid) = super_id {
                    let p = sink.get(pid);
                    if p.kind == TokenKind::String {
                        if let Some(gp) = p.parent {
                            if sink.get(gp).kind == TokenKind::Object {
                                super_id = p.parent;
                            }
                        }
                    }
                }
                pos += 1;
            }
            b'/' if can_comment && pos + 1 < len && source[pos + 1] == b'/' => {
                pos += 2;
                while pos < len && source[pos] != b'\n' && source[pos] != b'\r' {
                    pos += 1;
                }
            }
            _ => {
                can_comment = false;
                let (primitive, end) = match primitive::scan(source, pos) {
                    Ok(v) => v,
                    Err(e) => fail!(Some(e)),
                };
                if let Err(e) = begin_attach(sink, super_id, &mut root_seen) {
                    fail!(Some(e));
                }
                let id = match sink.alloc() {
                    Ok(id) => id,
                    Err(e) => fail!(Some(e)),
                };
                match primitive {
                    Primitive::Key => {
                        sink.set(id, Token { kind: TokenKind::String, start: pos, end, size: 0, parent: super_id, aux: TokenAux::None });
                    }
                    Primitive::Value { kind, aux, span_start } => {
                        sink.set(id, Token { kind, start: span_start, end, size: 0, parent: super_id, aux });
                    }
                }
                finalize_attach(sink, source, super_id);
                pos = end;
            }
        }
    }

    for i in 0..sink.len() {
        if sink.get(i).is_open() {
            fail!(Some(ParseError::Incomplete));
        }
    }

    Outcome { error: None, error_line: line, error_pos: pos }
}
