//! `seekget_*`/`seekget_array_*`: [`super::seek`] composed with a scalar
//! getter, returning a caller-supplied default when the key is absent or
//! the found token is the wrong kind — the read path a config-reading host
//! uses almost everywhere, so it doesn't have to re-derive the
//! seek-then-check-then-get dance at every call site.

use super::scalar;
use super::seek::{array_len, seek};
use crate::{Document, TokenKind};

macro_rules! seekget_scalar {
    ($name:ident, $get:path, $ty:ty) => {
        pub fn $name(doc: &Document, parent_id: usize, key: &[u8], default: $ty) -> $ty {
            seek(doc, parent_id, key).and_then(|id| $get(doc, id).ok()).unwrap_or(default)
        }
    };
}

seekget_scalar!(seekget_double, scalar::get_double, f64);
seekget_scalar!(seekget_i32, scalar::get_i32, i32);
seekget_scalar!(seekget_i64, scalar::get_i64, i64);
seekget_scalar!(seekget_u32, scalar::get_u32, u32);
seekget_scalar!(seekget_u64, scalar::get_u64, u64);
seekget_scalar!(seekget_bool, scalar::get_bool, bool);

/// `seek` + [`scalar::get_string`], writing `default` into `out` (truncated
/// and null-terminated the same way a found value would be) when `key` is
/// absent or not a `String`.
pub fn seekget_string<'b>(doc: &Document, parent_id: usize, key: &[u8], out: &'b mut [u8], default: &[u8]) -> &'b [u8] {
    let found = seek(doc, parent_id, key).filter(|&id| doc.tokens()[id].kind == TokenKind::String);
    let bytes = found.map(|id| doc.span(id)).unwrap_or(default);
    let cap = out.len();
    let n = bytes.len().min(cap.saturating_sub(1));
    out[..n].copy_from_slice(&bytes[..n]);
    if cap > 0 {
        out[n] = 0;
    }
    &out[..n]
}

/// Locates `key`'s value as an `Array` and converts up to `out.len()` of
/// its elements with `get`, returning how many were converted. Per
/// DESIGN.md (grounded in `cj5_seekget_array_double` and siblings), an
/// array longer than `out` is truncated rather than treated as an error —
/// the caller compares the returned count to `out.len()` to detect it.
fn seekget_array_with<T: Default + Copy>(
    doc: &Document,
    parent_id: usize,
    key: &[u8],
    out: &mut [T],
    get: impl Fn(&Document, usize) -> Result<T, crate::AccessError>,
) -> usize {
    let Some(array_id) = seek(doc, parent_id, key) else {
        return 0;
    };
    if doc.tokens()[array_id].kind != TokenKind::Array {
        return 0;
    }
    let len = array_len(doc, array_id).min(out.len());
    for (i, slot) in out.iter_mut().take(len).enumerate() {
        let elem_id = super::seek::array_elem(doc, array_id, i);
        *slot = get(doc, elem_id).unwrap_or_default();
    }
    len
}

macro_rules! seekget_array_scalar {
    ($name:ident, $get:path, $ty:ty) => {
        pub fn $name(doc: &Document, parent_id: usize, key: &[u8], out: &mut [$ty]) -> usize {
            seekget_array_with(doc, parent_id, key, out, $get)
        }
    };
}

seekget_array_scalar!(seekget_array_double, scalar::get_double, f64);
seekget_array_scalar!(seekget_array_i32, scalar::get_i32, i32);
seekget_array_scalar!(seekget_array_i64, scalar::get_i64, i64);
seekget_array_scalar!(seekget_array_u32, scalar::get_u32, u32);
seekget_array_scalar!(seekget_array_u64, scalar::get_u64, u64);
seekget_array_scalar!(seekget_array_bool, scalar::get_bool, bool);

/// Array-of-strings variant: each destination slot owns its own buffer
/// (unlike `cj5_seekget_array_string`'s single shared `max_str`), so longer
/// elements elsewhere in the array don't force every slot down to the
/// narrowest one's capacity.
pub fn seekget_array_string<'b>(doc: &Document, parent_id: usize, key: &[u8], out: &mut [&'b mut [u8]]) -> usize {
    let Some(array_id) = seek(doc, parent_id, key) else {
        return 0;
    };
    if doc.tokens()[array_id].kind != TokenKind::Array {
        return 0;
    }
    let len = array_len(doc, array_id).min(out.len());
    for (i, slot) in out.iter_mut().take(len).enumerate() {
        let elem_id = super::seek::array_elem(doc, array_id, i);
        if scalar::get_string(doc, elem_id, &mut **slot).is_err() && !slot.is_empty() {
            slot[0] = 0;
        }
    }
    len
}
