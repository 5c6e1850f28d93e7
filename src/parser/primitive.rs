use crate::classify::{is_digit, is_hex_digit, is_ident_start, is_primitive_terminator_invalid, starts_with};
use crate::error::ParseError;
use crate::token::NumberKind;
use crate::{TokenAux, TokenKind};

/// What a bare (unquoted) lexeme turned out to be, per spec §4.1.2.
pub(crate) enum Primitive {
    /// An unquoted object key, e.g. `foo` in `{foo: 1}`. Stored the same as
    /// a quoted string token.
    Key,
    Value {
        kind: TokenKind,
        aux: TokenAux,
        /// The span to store on the token. For hex numbers this starts
        /// past the `0x` prefix; for everything else it's `start..end`.
        span_start: usize,
    },
}

/// Scans a bare lexeme starting at `start` (which is *not* one of the
/// structural/whitespace bytes the main loop already special-cases).
/// Returns the classification plus the terminator's index — the main loop's
/// cursor is left pointing *at* the terminator so it gets reprocessed by the
/// ordinary dispatch (a colon, comma, bracket, or whitespace byte).
///
/// End of input also terminates a primitive (it is *not* `Incomplete`): a
/// lone root-level value like `42` or `null` has nothing after it to
/// dispatch on, and spec.md §4.3 requires that to succeed. A primitive left
/// dangling inside a still-open container is still caught — by the main
/// loop's end-of-input sweep for unclosed containers, not by this scan.
pub(crate) fn scan(source: &[u8], start: usize) -> Result<(Primitive, usize), ParseError> {
    let len = source.len();
    let mut i = start;
    let mut is_key = false;
    loop {
        if i >= len {
            break;
        }
        match source[i] {
            b':' => {
                is_key = true;
                break;
            }
            b'\t' | b'\r' | b'\n' | b' ' | b',' | b']' | b'}' => break,
            c if is_primitive_terminator_invalid(c) => return Err(ParseError::Invalid),
            _ => {}
        }
        i += 1;
    }
    let end = i;
    let span = &source[start..end];
    if span.is_empty() {
        return Err(ParseError::Invalid);
    }

    if is_key {
        validate_key(span)?;
        return Ok((Primitive::Key, end));
    }

    classify_value(span, start).map(|(kind, aux, span_start)| (Primitive::Value { kind, aux, span_start }, end))
}

/// `[A-Za-z_][A-Za-z0-9_]*`, per spec §4.1.2.
fn validate_key(span: &[u8]) -> Result<(), ParseError> {
    for (i, &c) in span.iter().enumerate() {
        if is_ident_start(c) {
            continue;
        }
        if is_digit(c) && i != 0 {
            continue;
        }
        return Err(ParseError::Invalid);
    }
    Ok(())
}

fn classify_value(span: &[u8], start: usize) -> Result<(TokenKind, TokenAux, usize), ParseError> {
    if span == b"null" {
        return Ok((TokenKind::Null, TokenAux::None, start));
    }
    if starts_with(span, b"true") || starts_with(span, b"fals") {
        return Ok((TokenKind::Bool, TokenAux::None, start));
    }
    if starts_with(span, b"0x") {
        for &c in &span[2..] {
            if !is_hex_digit(c) {
                return Err(ParseError::Invalid);
            }
        }
        return Ok((TokenKind::Number, TokenAux::Number(NumberKind::Hex), start + 2));
    }

    // Spec §9: consume one leading sign at `start`; never re-inspect a later
    // byte as a sign (the original C reads one byte past it by mistake).
    let digits_from = if span[0] == b'+' || span[0] == b'-' { 1 } else { 0 };
    let mut kind = NumberKind::Int;
    for &c in &span[digits_from..] {
        if c == b'.' {
            if kind == NumberKind::Float {
                return Err(ParseError::Invalid);
            }
            kind = NumberKind::Float;
            continue;
        }
        if !is_digit(c) {
            return Err(ParseError::Invalid);
        }
    }
    Ok((TokenKind::Number, TokenAux::Number(kind), start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(s: &[u8]) -> (TokenKind, TokenAux, usize) {
        classify_value(s, 0).unwrap()
    }

    #[test]
    fn recognizes_null_true_false() {
        assert_eq!(classify(b"null").0, TokenKind::Null);
        assert_eq!(classify(b"true").0, TokenKind::Bool);
        assert_eq!(classify(b"false").0, TokenKind::Bool);
    }

    #[test]
    fn hex_strips_prefix() {
        let (kind, aux, span_start) = classify(b"0xff");
        assert_eq!(kind, TokenKind::Number);
        assert_eq!(aux, TokenAux::Number(NumberKind::Hex));
        assert_eq!(span_start, 2);
    }

    #[test]
    fn rejects_double_dot() {
        assert!(classify_value(b"1.2.3", 0).is_err());
    }

    #[test]
    fn signed_int_and_float() {
        assert_eq!(classify(b"-12").1, TokenAux::Number(NumberKind::Int));
        assert_eq!(classify(b"+3.5").1, TokenAux::Number(NumberKind::Float));
    }

    #[test]
    fn bare_key_allows_leading_underscore_rejects_leading_digit() {
        assert!(validate_key(b"_foo").is_ok());
        assert!(validate_key(b"1foo").is_err());
        assert!(validate_key(b"foo_1").is_ok());
    }
}
