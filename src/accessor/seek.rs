use crate::hash::fnv1a32;
use crate::token::TokenKind;
use crate::Document;

/// Visits the direct children of `parent_id` — tokens whose `parent` field
/// is exactly `parent_id` — in source order, stopping once `parent.size`
/// of them have been seen. Shared by every accessor that walks one level of
/// the tree ([`seek`], [`super::array_elem`], [`super::child_count`]'s
/// callers).
fn direct_children<'a>(doc: &Document<'a>, parent_id: usize) -> impl Iterator<Item = usize> + 'a {
    let tokens = doc.tokens();
    let want = tokens[parent_id].size as usize;
    let mut seen = 0usize;
    ((parent_id + 1)..tokens.len()).filter(move |&i| {
        if seen >= want {
            return false;
        }
        if tokens[i].parent == Some(parent_id) {
            seen += 1;
            true
        } else {
            false
        }
    })
}

/// Looks up `key` among `parent_id`'s direct object keys and returns the
/// index of the bound value, or `None` if absent.
///
/// `parent_id` is expected to be an `Object`; a direct child only counts as
/// a candidate key if it is a bound `String` (`kind == String && size ==
/// 1`), so passing an `Array`'s id simply never matches (its direct
/// children are values, not keys, and a value's `size` is `0` unless it is
/// itself a container). Hash collisions are resolved with a span-equality
/// check, per spec.md §9 — two distinct keys may share an FNV-1a bucket, so
/// a hash match alone is not proof of a match.
pub fn seek(doc: &Document, parent_id: usize, key: &[u8]) -> Option<usize> {
    let query = fnv1a32(key);
    for child in direct_children(doc, parent_id) {
        let t = doc.tokens()[child];
        if t.kind != TokenKind::String || t.size != 1 {
            continue;
        }
        if t.aux.key_hash() == Some(query) && doc.span(child) == key {
            return Some(child + 1);
        }
    }
    None
}

/// Like [`seek`], but when a direct key doesn't match and its bound value
/// is itself a container, searches inside that container before moving on
/// to the next sibling key. Depth-first, left-to-right; the first match
/// found in that order wins, so a shadowing key at an outer level is
/// preferred over a same-named key nested under an earlier sibling.
pub fn seek_recursive(doc: &Document, parent_id: usize, key: &[u8]) -> Option<usize> {
    let query = fnv1a32(key);
    for child in direct_children(doc, parent_id) {
        let t = doc.tokens()[child];
        if t.kind != TokenKind::String || t.size != 1 {
            continue;
        }
        if t.aux.key_hash() == Some(query) && doc.span(child) == key {
            return Some(child + 1);
        }
        let value_id = child + 1;
        let value = doc.tokens()[value_id];
        if value.kind.is_container() {
            if let Some(found) = seek_recursive(doc, value_id, key) {
                return Some(found);
            }
        }
    }
    None
}

/// Number of direct children of `id` — for an `Object` this is the key
/// count, for an `Array` the element count, for a bound key `1`, and for
/// any scalar leaf `0`.
pub fn child_count(doc: &Document, id: usize) -> usize {
    doc.tokens()[id].size as usize
}

/// Index of the `index`th direct child of `array_id` (0-based), in source
/// order. Out-of-range `index` is a caller bug: this panics rather than
/// returning a sentinel, matching spec.md §4.2's "assertion" contract.
pub fn array_elem(doc: &Document, array_id: usize, index: usize) -> usize {
    assert_eq!(doc.tokens()[array_id].kind, TokenKind::Array, "array_elem: not an array token");
    direct_children(doc, array_id)
        .nth(index)
        .unwrap_or_else(|| panic!("array_elem: index {index} out of range"))
}

/// Convenience over [`child_count`] that additionally asserts `id` names an
/// `Array` token — the Rust counterpart of `cj5_get_array_count`, kept
/// distinct from the general `cj5_get_child_count` the same way the
/// original exposes both (see DESIGN.md).
pub fn array_len(doc: &Document, id: usize) -> usize {
    assert_eq!(doc.tokens()[id].kind, TokenKind::Array, "array_len: not an array token");
    doc.tokens()[id].size as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Token};

    #[test]
    fn seek_finds_direct_key() {
        let mut tokens = [Token::EMPTY; 8];
        let doc = parse(b"{a:1, b:2}", &mut tokens);
        assert!(doc.error.is_none());
        let id = seek(&doc, 0, b"b").unwrap();
        assert_eq!(doc.span(id), b"2");
    }

    #[test]
    fn seek_returns_none_for_missing_key() {
        let mut tokens = [Token::EMPTY; 8];
        let doc = parse(b"{a:1}", &mut tokens);
        assert_eq!(seek(&doc, 0, b"missing"), None);
    }

    #[test]
    fn seek_does_not_descend_into_nested_objects() {
        let mut tokens = [Token::EMPTY; 16];
        let doc = parse(b"{outer:{inner:1}}", &mut tokens);
        assert_eq!(seek(&doc, 0, b"inner"), None);
    }

    #[test]
    fn seek_recursive_finds_nested_key() {
        let mut tokens = [Token::EMPTY; 16];
        let doc = parse(b"{outer:{inner:42}}", &mut tokens);
        let id = seek_recursive(&doc, 0, b"inner").unwrap();
        assert_eq!(doc.span(id), b"42");
    }

    #[test]
    fn seek_recursive_prefers_outer_match() {
        let mut tokens = [Token::EMPTY; 16];
        let doc = parse(b"{a:{a:2}, z:1}", &mut tokens);
        // outer 'a' is visited before descending into its own value.
        let id = seek_recursive(&doc, 0, b"a").unwrap();
        assert_eq!(doc.tokens()[id].kind, TokenKind::Object);
    }

    #[test]
    fn array_elem_walks_elements_in_order() {
        let mut tokens = [Token::EMPTY; 8];
        let doc = parse(b"[10, 20, 30]", &mut tokens);
        assert_eq!(doc.span(array_elem(&doc, 0, 0)), b"10");
        assert_eq!(doc.span(array_elem(&doc, 0, 1)), b"20");
        assert_eq!(doc.span(array_elem(&doc, 0, 2)), b"30");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn array_elem_panics_out_of_range() {
        let mut tokens = [Token::EMPTY; 8];
        let doc = parse(b"[1]", &mut tokens);
        array_elem(&doc, 0, 5);
    }

    #[test]
    fn child_count_matches_object_key_count() {
        let mut tokens = [Token::EMPTY; 8];
        let doc = parse(b"{a:1, b:2, c:3}", &mut tokens);
        assert_eq!(child_count(&doc, 0), 3);
    }
}
