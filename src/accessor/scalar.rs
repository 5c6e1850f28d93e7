use crate::token::NumberKind;
use crate::{AccessError, Document, TokenKind};

fn require(doc: &Document, id: usize, kind: TokenKind) -> Result<(), AccessError> {
    if doc.tokens()[id].kind == kind {
        Ok(())
    } else {
        Err(AccessError::WrongKind)
    }
}

/// Copies `doc`'s span for `id` into `out`, truncating to `out.len() - 1`
/// bytes and null-terminating, mirroring `cj5_get_string`'s contract for
/// hosts that want a scratch copy rather than a zero-copy borrow (for the
/// latter use [`Document::span`] directly). Returns the written prefix,
/// excluding the trailing null.
pub fn get_string<'b>(doc: &Document, id: usize, out: &'b mut [u8]) -> Result<&'b [u8], AccessError> {
    require(doc, id, TokenKind::String)?;
    let span = doc.span(id);
    let cap = out.len();
    let n = span.len().min(cap.saturating_sub(1));
    out[..n].copy_from_slice(&span[..n]);
    if cap > 0 {
        out[n] = 0;
    }
    Ok(&out[..n])
}

/// Parses a signed decimal span (optional sign, optional single `.`) with a
/// hand-rolled digit scan; returns `(value, bytes consumed)`. Per spec.md
/// §4.2, a caller that sees `consumed < span.len()` should fall back to the
/// platform parser — [`get_double`] does this automatically.
fn scan_decimal(span: &[u8]) -> Option<(f64, usize)> {
    let mut i = 0;
    let mut negative = false;
    if let Some(&b) = span.first() {
        if b == b'+' || b == b'-' {
            negative = b == b'-';
            i = 1;
        }
    }
    let digits_start = i;
    let mut whole = 0f64;
    while i < span.len() && span[i].is_ascii_digit() {
        whole = whole * 10.0 + f64::from(span[i] - b'0');
        i += 1;
    }
    let mut saw_digit = i > digits_start;
    let mut frac = 0f64;
    let mut frac_scale = 1f64;
    if i < span.len() && span[i] == b'.' {
        i += 1;
        while i < span.len() && span[i].is_ascii_digit() {
            frac = frac * 10.0 + f64::from(span[i] - b'0');
            frac_scale *= 10.0;
            saw_digit = true;
            i += 1;
        }
    }
    if !saw_digit {
        return None;
    }
    let magnitude = whole + frac / frac_scale;
    Some((if negative { -magnitude } else { magnitude }, i))
}

/// Requires `doc.tokens()[id].kind == Number`. Hex-subtype spans parse as
/// an unsigned hex integer; everything else goes through [`scan_decimal`],
/// falling back to the platform float parser if the hand-rolled scan left
/// trailing bytes unconsumed (spec.md §4.2).
pub fn get_double(doc: &Document, id: usize) -> Result<f64, AccessError> {
    require(doc, id, TokenKind::Number)?;
    let span = doc.span(id);
    if doc.tokens()[id].aux.number_kind() == Some(NumberKind::Hex) {
        return std::str::from_utf8(span)
            .ok()
            .and_then(|s| u64::from_str_radix(s, 16).ok())
            .map(|v| v as f64)
            .ok_or(AccessError::Malformed);
    }
    match scan_decimal(span) {
        Some((value, consumed)) if consumed == span.len() => Ok(value),
        _ => std::str::from_utf8(span)
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or(AccessError::Malformed),
    }
}

/// Sign and unsigned magnitude of a decimal (`Int`/`Float`) span, stopping
/// at a `.` so an integer accessor applied to a `Float` token truncates
/// toward zero rather than erroring. Saturates at `u128` range, which no
/// realistic token span can reach.
fn decimal_magnitude(span: &[u8]) -> (bool, u128) {
    let mut i = 0;
    let mut negative = false;
    if let Some(&b) = span.first() {
        if b == b'+' || b == b'-' {
            negative = b == b'-';
            i = 1;
        }
    }
    let mut magnitude = 0u128;
    for &b in &span[i..] {
        if b == b'.' {
            break;
        }
        if b.is_ascii_digit() {
            magnitude = magnitude.saturating_mul(10).saturating_add(u128::from(b - b'0'));
        }
    }
    (negative, magnitude)
}

fn hex_magnitude(span: &[u8]) -> u128 {
    let mut magnitude = 0u128;
    for &b in span {
        if let Some(d) = (b as char).to_digit(16) {
            magnitude = magnitude.saturating_mul(16).saturating_add(u128::from(d));
        }
    }
    magnitude
}

fn magnitude_of(doc: &Document, id: usize) -> (bool, u128) {
    let span = doc.span(id);
    if doc.tokens()[id].aux.number_kind() == Some(NumberKind::Hex) {
        (false, hex_magnitude(span))
    } else {
        decimal_magnitude(span)
    }
}

/// Overflow policy for every integer accessor below: saturate at the
/// target type's range rather than wrap or panic (spec.md §4.2 leaves this
/// implementation-defined and names saturation as the preferred choice).
macro_rules! signed_getter {
    ($name:ident, $ty:ty) => {
        pub fn $name(doc: &Document, id: usize) -> Result<$ty, AccessError> {
            require(doc, id, TokenKind::Number)?;
            let (negative, magnitude) = magnitude_of(doc, id);
            Ok(if negative {
                let min_magnitude = (<$ty>::MIN as i128).unsigned_abs();
                -(magnitude.min(min_magnitude) as i128) as $ty
            } else {
                magnitude.min(<$ty>::MAX as u128) as $ty
            })
        }
    };
}

macro_rules! unsigned_getter {
    ($name:ident, $ty:ty) => {
        pub fn $name(doc: &Document, id: usize) -> Result<$ty, AccessError> {
            require(doc, id, TokenKind::Number)?;
            let (negative, magnitude) = magnitude_of(doc, id);
            if negative {
                return Ok(0);
            }
            Ok(magnitude.min(<$ty>::MAX as u128) as $ty)
        }
    };
}

signed_getter!(get_i32, i32);
signed_getter!(get_i64, i64);
unsigned_getter!(get_u32, u32);
unsigned_getter!(get_u64, u64);

/// Requires `kind == Bool`. `cj5.c`'s primitive scan only checks a `true`/
/// `fals` prefix (see `classify_value`), so the only two `Bool` spans that
/// can exist start with `t` or `f`.
pub fn get_bool(doc: &Document, id: usize) -> Result<bool, AccessError> {
    require(doc, id, TokenKind::Bool)?;
    Ok(doc.span(id).first() == Some(&b't'))
}
