//! Property tests over generated documents: reflexivity, subset pruning,
//! marker balance, number spellings and rendering round-trips.

use json_compare::{compare, compare_values, Difference, Options, Tag};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Number literals in every JSON spelling, exponent forms included; the
/// tree strategy below cannot produce those, since a [`Value`] built from
/// an integer or float has no spelling of its own.
const NUMBER_TEXT: &str = r"-?(0|[1-9][0-9]{0,2})(\.[0-9]{1,3})?([eE][+-]?[0-9]{1,2})?";

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn sentinel() -> Options {
    Options {
        added: Tag::new("<+>", "</+>"),
        removed: Tag::new("<->", "</->"),
        changed: Tag::new("<~>", "</~>"),
        ..Options::default()
    }
}

/// Drop the last entry of every non-empty container, recursively, producing
/// a strict subset of `v`. Also reports whether anything was dropped.
fn prune(v: &Value) -> (Value, bool) {
    match v {
        Value::Array(items) => {
            let mut changed = !items.is_empty();
            let mut kept = Vec::new();
            for item in items.iter().take(items.len().saturating_sub(1)) {
                let (child, child_changed) = prune(item);
                changed |= child_changed;
                kept.push(child);
            }
            (Value::Array(kept), changed)
        }
        Value::Object(entries) => {
            let len = entries.len();
            let mut changed = len > 0;
            let mut kept = Map::new();
            for (key, value) in entries.iter().take(len.saturating_sub(1)) {
                let (child, child_changed) = prune(value);
                changed |= child_changed;
                kept.insert(key.clone(), child);
            }
            (Value::Object(kept), changed)
        }
        other => (other.clone(), false),
    }
}

proptest! {
    #[test]
    fn comparing_a_document_with_itself_fully_matches(v in arb_json()) {
        let (diff, text) = compare_values(&v, &v, &sentinel());
        prop_assert_eq!(diff, Difference::FullMatch);
        prop_assert!(
            !text.contains("<+>") && !text.contains("<->") && !text.contains("<~>"),
            "markers in a full match: {}",
            text
        );
    }

    #[test]
    fn pruned_copies_classify_as_subsets(v in arb_json()) {
        let (pruned, dropped) = prune(&v);
        let (diff, _) = compare_values(&v, &pruned, &Options::default());
        if dropped {
            prop_assert_eq!(diff, Difference::SupersetMatch);
        } else {
            prop_assert_eq!(diff, Difference::FullMatch);
        }
    }

    #[test]
    fn any_addition_forces_no_match(v in arb_json()) {
        // Keys in generated documents are at most four characters, so the
        // added key can never collide.
        let a = json!({ "root": v.clone() });
        let b = json!({ "root": v, "zzzzz": true });
        let (diff, _) = compare_values(&a, &b, &Options::default());
        prop_assert_eq!(diff, Difference::NoMatch);
    }

    #[test]
    fn classification_agrees_with_emitted_markers(a in arb_json(), b in arb_json()) {
        let (diff, text) = compare_values(&a, &b, &sentinel());
        match diff {
            Difference::FullMatch => {
                prop_assert!(!text.contains("<+>") && !text.contains("<->") && !text.contains("<~>"));
            }
            Difference::SupersetMatch => {
                prop_assert!(text.contains("<->"));
                prop_assert!(!text.contains("<+>") && !text.contains("<~>"));
            }
            Difference::NoMatch => {
                prop_assert!(text.contains("<+>") || text.contains("<~>"));
            }
            other => prop_assert!(false, "unexpected classification {}", other),
        }
    }

    #[test]
    fn marker_pairs_balance_on_every_line(a in arb_json(), b in arb_json()) {
        let json = Options {
            indent: "  ".to_owned(),
            ..sentinel()
        };
        let yaml = sentinel().with_yaml_output();
        for opts in [json, yaml] {
            let (_, text) = compare_values(&a, &b, &opts);
            for line in text.lines() {
                for (begin, end) in [("<+>", "</+>"), ("<->", "</->"), ("<~>", "</~>")] {
                    prop_assert_eq!(
                        line.matches(begin).count(),
                        line.matches(end).count(),
                        "unbalanced {} on line {:?}",
                        begin,
                        line
                    );
                }
            }
        }
    }

    #[test]
    fn full_match_rendering_parses_back_to_the_document(v in arb_json()) {
        let (diff, text) = compare_values(&v, &v, &Options::default());
        prop_assert_eq!(diff, Difference::FullMatch);
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(reparsed, v);
    }

    #[test]
    fn number_spellings_classify_by_their_exact_text(a in NUMBER_TEXT, b in NUMBER_TEXT) {
        let (diff, text) = compare(a.as_bytes(), b.as_bytes(), &Options::default());
        if a == b {
            prop_assert_eq!(diff, Difference::FullMatch);
            prop_assert_eq!(text, a);
        } else {
            prop_assert_eq!(diff, Difference::NoMatch);
            prop_assert_eq!(text, format!("{} => {}", a, b));
        }
    }
}
