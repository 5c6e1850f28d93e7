//! Byte classification used by the tokenizer's scanners.
//!
//! `cj5.c` leans on bit-twiddling range checks (`cj5__isrange`) and a
//! pointer-cast word compare for `null`/`true`/`false`. spec.md §9
//! re-specifies the latter as a bytewise prefix compare; this module
//! implements both re-specifications as plain, readable range checks —
//! there is no performance reason to keep the original's micro-optimized
//! form once the buffer is no longer required to be null-terminated ASCII.

#[inline]
pub(crate) fn is_ascii_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub(crate) fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || is_digit(b)
}

/// True for control bytes and non-ASCII bytes, which spec.md §4.1.2 rejects
/// anywhere inside a bare primitive.
#[inline]
pub(crate) fn is_primitive_terminator_invalid(b: u8) -> bool {
    b < 32 || b >= 127
}

#[inline]
pub(crate) fn starts_with(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && &haystack[..needle.len()] == needle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_set_matches_spec() {
        for b in [b' ', b'\t', b'\r', b'\n'] {
            assert!(is_ascii_whitespace(b));
        }
        assert!(!is_ascii_whitespace(b'a'));
    }

    #[test]
    fn ident_rules() {
        assert!(is_ident_start(b'_'));
        assert!(is_ident_start(b'A'));
        assert!(!is_ident_start(b'0'));
        assert!(is_ident_continue(b'0'));
    }

    #[test]
    fn prefix_compare_matches_fourcc_semantics() {
        assert!(starts_with(b"null", b"null"));
        assert!(starts_with(b"nullish", b"null"));
        assert!(!starts_with(b"nul", b"null"));
        assert!(starts_with(b"fals", b"fals"));
    }

    #[test]
    fn control_and_non_ascii_are_invalid_in_primitives() {
        assert!(is_primitive_terminator_invalid(0));
        assert!(is_primitive_terminator_invalid(31));
        assert!(!is_primitive_terminator_invalid(32));
        assert!(!is_primitive_terminator_invalid(126));
        assert!(is_primitive_terminator_invalid(127));
        assert!(is_primitive_terminator_invalid(200));
    }
}
