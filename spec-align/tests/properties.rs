//! Property tests of the alignment engine.

use proptest::prelude::*;
use spec_align::{align, count_errors, Content, ErrorKind, ErrorWarningCount};

/// Raw trees without wildcards, up to a few levels deep.
fn content_tree() -> impl Strategy<Value = Content> {
    let leaf = "[a-c ]{0,4}".prop_map(Content::leaf);
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Content::sequence),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Content::multiset),
            prop::collection::vec(("[a-d]{1,3}", inner.clone()), 0..4)
                .prop_map(|entries| Content::mapping(entries)),
            prop::collection::vec(("[a-d]{1,3}", inner), 0..4)
                .prop_map(|entries| Content::ordered_mapping(entries)),
        ]
    })
}

/// Spreads spaces and non-breaking spaces through `text`.
fn spaced(text: &str) -> String {
    let mut out = String::from('\u{a0}');
    for c in text.chars() {
        out.push(c);
        out.push(' ');
    }
    out
}

proptest! {
    #[test]
    fn test_leaves_equal_modulo_spaces(text in "[a-z0-9]{0,12}") {
        let result = align(&Content::leaf(text.as_str()), &Content::leaf(spaced(&text)));
        prop_assert!(matches!(result, Content::Leaf(_)), "got {:?}", result);
    }

    #[test]
    fn test_equal_length_sequences_stay_clean(texts in prop::collection::vec("[a-z]{0,6}", 0..8)) {
        let left = Content::sequence(texts.iter().map(|t| Content::leaf(t.as_str())).collect());
        let right = Content::sequence(texts.iter().map(|t| Content::leaf(spaced(t))).collect());

        let result = align(&left, &right);
        let Content::Sequence(seq) = &result else {
            panic!("expected sequence, got {:?}", result);
        };
        prop_assert_eq!(seq.items.len(), texts.len());
        prop_assert!(seq.items.iter().all(|item| !item.is_mismatch()));
    }

    #[test]
    fn test_multiset_order_does_not_change_counts(
        (left, right, left_shuffled, right_shuffled) in (
            prop::collection::vec(content_tree(), 0..5),
            prop::collection::vec(content_tree(), 0..5),
        )
            .prop_flat_map(|(left, right)| (
                Just(left.clone()),
                Just(right.clone()),
                Just(left).prop_shuffle(),
                Just(right).prop_shuffle(),
            ))
    ) {
        let in_order = count_errors(&align(&Content::multiset(left.clone()), &Content::multiset(right.clone())));
        let left_permuted = count_errors(&align(
            &Content::multiset(left_shuffled.clone()),
            &Content::multiset(right.clone()),
        ));
        let right_permuted = count_errors(&align(
            &Content::multiset(left),
            &Content::multiset(right_shuffled.clone()),
        ));
        let both_permuted = count_errors(&align(
            &Content::multiset(left_shuffled),
            &Content::multiset(right_shuffled),
        ));
        prop_assert_eq!(in_order, left_permuted);
        prop_assert_eq!(in_order, right_permuted);
        prop_assert_eq!(in_order, both_permuted);
    }

    #[test]
    fn test_self_alignment_is_clean(tree in content_tree()) {
        let root = Content::mapping([("root", tree)]);
        prop_assert_eq!(count_errors(&align(&root, &root)), ErrorWarningCount::ZERO);
    }

    #[test]
    fn test_wildcard_absorbs_anything(
        tree in prop_oneof![content_tree(), Just(Content::wildcard())],
        wildcard_left in any::<bool>(),
    ) {
        let result = if wildcard_left {
            align(&Content::wildcard(), &tree)
        } else {
            align(&tree, &Content::wildcard())
        };
        match &result {
            Content::Mismatch(m) => prop_assert_eq!(m.kind(), ErrorKind::WildcardMatched),
            other => panic!("expected mismatch, got {:?}", other),
        }
        prop_assert_eq!(count_errors(&result), ErrorWarningCount::new(0, 1));
    }
}
