//! Property-based tests for the invariants spec.md §8 names against random
//! JSON5 documents. Each test generates a document with a bounded strategy,
//! parses it, and checks the resulting [`json5lite::Document`] against one
//! invariant.

use json5lite::{parse, parse_len, Token, TokenKind};
use proptest::prelude::*;

const CAPACITY: usize = 256;

/// A small in-memory JSON5 value tree, rendered to bytes by [`render`].
/// Bounded depth/width keeps generated documents well within `CAPACITY`
/// tokens and keeps shrinking tractable.
#[derive(Debug, Clone)]
enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Hex(u16),
    Str(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

fn ident_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,6}").expect("valid regex")
}

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::Int),
        any::<u16>().prop_map(Value::Hex),
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::Str),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((ident_strategy(), inner), 0..4).prop_map(Value::Object),
        ]
    })
}

fn render(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Hex(n) => out.push_str(&format!("0x{:x}", n)),
        Value::Str(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                render(item, out);
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            for (i, (key, val)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(key);
                out.push(':');
                render(val, out);
            }
            out.push('}');
        }
    }
}

proptest! {
    /// Invariant 1 (spec.md §8): tokens are stored in non-decreasing
    /// `start` order.
    #[test]
    fn source_order_is_non_decreasing(value in value_strategy()) {
        let mut text = String::new();
        render(&value, &mut text);
        let mut tokens = [Token::EMPTY; CAPACITY];
        let doc = parse(text.as_bytes(), &mut tokens);
        prop_assert!(doc.error.is_none(), "unexpected parse error on generated input: {:?}", text);
        let toks = doc.tokens();
        for w in toks.windows(2) {
            prop_assert!(w[0].start <= w[1].start);
        }
    }

    /// Invariant 2: every non-root token's parent index is strictly less
    /// than its own index.
    #[test]
    fn parent_index_precedes_child(value in value_strategy()) {
        let mut text = String::new();
        render(&value, &mut text);
        let mut tokens = [Token::EMPTY; CAPACITY];
        let doc = parse(text.as_bytes(), &mut tokens);
        prop_assert!(doc.error.is_none());
        for (i, t) in doc.tokens().iter().enumerate() {
            if let Some(p) = t.parent {
                prop_assert!(p < i);
            }
        }
    }

    /// Invariant 3: a container's `size` equals the number of tokens whose
    /// `parent` equals that container's own index.
    #[test]
    fn size_matches_direct_child_count(value in value_strategy()) {
        let mut text = String::new();
        render(&value, &mut text);
        let mut tokens = [Token::EMPTY; CAPACITY];
        let doc = parse(text.as_bytes(), &mut tokens);
        prop_assert!(doc.error.is_none());
        let toks = doc.tokens();
        for (i, t) in toks.iter().enumerate() {
            if t.kind == TokenKind::Object || t.kind == TokenKind::Array {
                let actual = toks.iter().filter(|c| c.parent == Some(i)).count();
                prop_assert_eq!(actual, t.size as usize);
            }
        }
    }

    /// Invariant 4: after a successful parse, every container is closed.
    #[test]
    fn every_container_is_closed(value in value_strategy()) {
        let mut text = String::new();
        render(&value, &mut text);
        let mut tokens = [Token::EMPTY; CAPACITY];
        let doc = parse(text.as_bytes(), &mut tokens);
        prop_assert!(doc.error.is_none());
        for t in doc.tokens() {
            if t.kind == TokenKind::Object || t.kind == TokenKind::Array {
                prop_assert_ne!(t.end, usize::MAX);
            }
        }
    }

    /// Invariant 5: every span is within source bounds and non-inverted.
    #[test]
    fn spans_are_well_formed(value in value_strategy()) {
        let mut text = String::new();
        render(&value, &mut text);
        let mut tokens = [Token::EMPTY; CAPACITY];
        let doc = parse(text.as_bytes(), &mut tokens);
        prop_assert!(doc.error.is_none());
        for t in doc.tokens() {
            prop_assert!(t.start <= t.end);
            prop_assert!(t.end <= text.len());
        }
    }

    /// Invariant 6: a dry run (`parse_len`) and a real parse agree on the
    /// number of tokens required.
    #[test]
    fn dry_run_matches_real_parse(value in value_strategy()) {
        let mut text = String::new();
        render(&value, &mut text);
        let mut tokens = [Token::EMPTY; CAPACITY];
        let doc = parse(text.as_bytes(), &mut tokens);
        prop_assert!(doc.error.is_none());
        let counted = parse_len(text.as_bytes()).expect("dry run should also succeed");
        prop_assert_eq!(counted, doc.num_tokens());
    }

    /// Invariant 7: round-tripping a signed integer literal through
    /// `parse` + `get_i32` recovers the original value.
    #[test]
    fn integer_roundtrip(n in any::<i32>()) {
        let text = n.to_string();
        let mut tokens = [Token::EMPTY; 4];
        let doc = parse(text.as_bytes(), &mut tokens);
        prop_assert!(doc.error.is_none());
        let got = json5lite::accessor::get_i32(&doc, 0).expect("number token");
        prop_assert_eq!(got, n);
    }

    /// Invariant 7 (hex half): an unsigned hex literal round-trips through
    /// `get_u32`.
    #[test]
    fn hex_roundtrip(n in any::<u16>()) {
        let text = format!("0x{:x}", n);
        let mut tokens = [Token::EMPTY; 4];
        let doc = parse(text.as_bytes(), &mut tokens);
        prop_assert!(doc.error.is_none());
        let got = json5lite::accessor::get_u32(&doc, 0).expect("number token");
        prop_assert_eq!(got, u32::from(n));
    }
}
