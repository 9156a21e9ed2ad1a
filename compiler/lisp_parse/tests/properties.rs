//! Property tests: printing a parsed tree and reading it back is lossless.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use lisp_ir::Value;
use lisp_parse::{classify_atom, parse, split_top_level};
use proptest::prelude::*;

fn symbol() -> impl Strategy<Value = Value> {
    "[a-zA-Z+*/<>=?!-][a-zA-Z0-9+*/<>=?!.-]{0,6}"
        .prop_filter("reads back as a symbol", |s| {
            matches!(classify_atom(s), Value::Symbol(_))
        })
        .prop_map(Value::Symbol)
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        any::<f64>()
            .prop_filter("finite", |x| x.is_finite())
            .prop_map(Value::Float),
        symbol(),
    ]
}

fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        proptest::collection::vec(inner, 0..6).prop_map(Value::List)
    })
}

proptest! {
    #[test]
    fn printed_form_reparses_to_same_tree(value in tree()) {
        let printed = value.to_string();
        let reparsed = parse(&printed).unwrap();
        prop_assert_eq!(reparsed, Some(value));
    }

    #[test]
    fn quote_form_matches_shorthand(value in tree()) {
        let printed = value.to_string();
        let long = parse(&format!("(quote {printed})")).unwrap();
        let short = parse(&format!("'{printed}")).unwrap();
        prop_assert_eq!(long, short);
    }

    #[test]
    fn split_yields_one_chunk_per_tree(values in proptest::collection::vec(tree(), 0..5)) {
        let source = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        let tokens = lisp_lexer::tokenize(&source);
        let chunks = split_top_level(&tokens);
        prop_assert_eq!(chunks.len(), values.len());
        for (chunk, value) in chunks.into_iter().zip(&values) {
            let parsed = lisp_parse::Parser::parse_tokens(chunk).unwrap();
            prop_assert_eq!(parsed.as_ref(), Some(value));
        }
    }
}
