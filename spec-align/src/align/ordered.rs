//! Alignment of ordered records.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use super::Aligner;
use crate::content::{Annotation, Content, Mismatch, OrderedMapping, Origin, Side};
use crate::taxonomy::ErrorKind;

/// Aligns two ordered mappings position by position.
///
/// Keys at the same position align directly. When they differ, each key is
/// looked up on the other side: found elsewhere, it aligns and is flagged as
/// reordered; not found, it is missing. Every key is reported once, at the
/// first position where it shows up on either side.
pub(crate) fn align(aligner: &Aligner, left: &OrderedMapping, right: &OrderedMapping) -> Content {
    let left_keys: Vec<&str> = left.keys().collect();
    let right_keys: Vec<&str> = right.keys().collect();
    let mut entries: IndexMap<String, Content> = IndexMap::new();
    let mut consumed: FxHashSet<&str> = FxHashSet::default();

    for i in 0..left_keys.len().max(right_keys.len()) {
        let key_left = left_keys.get(i).copied();
        let key_right = right_keys.get(i).copied();

        if let (Some(l), Some(r)) = (key_left, key_right) {
            if l == r {
                if consumed.insert(l) {
                    entries.insert(l.to_string(), aligner.align(&left.entries[l], &right.entries[r]));
                }
                continue;
            }
        }

        for (key, side) in [(key_left, Side::Left), (key_right, Side::Right)] {
            let Some(key) = key else { continue };
            if !consumed.insert(key) {
                continue;
            }
            let result = match (left.get(key), right.get(key)) {
                (Some(l), Some(r)) => {
                    Annotation::new(aligner.align(l, r), ErrorKind::ReorderedEntry).into()
                }
                _ => {
                    let own = match side {
                        Side::Left => &left.entries[key],
                        Side::Right => &right.entries[key],
                    };
                    Mismatch::only(side, own.clone(), ErrorKind::MissingEntry).into()
                }
            };
            entries.insert(key.to_string(), result);
        }
    }

    Content::OrderedMapping(OrderedMapping {
        entries,
        origin: Origin::pair(&left.origin, &right.origin),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::{count_errors, ErrorWarningCount};

    fn ordered(keys: &[&str]) -> Content {
        Content::ordered_mapping(keys.iter().map(|k| (*k, Content::leaf(k.to_uppercase()))))
    }

    fn result_keys(content: &Content) -> Vec<&str> {
        match content {
            Content::OrderedMapping(map) => map.keys().collect(),
            other => panic!("expected ordered mapping, got {:?}", other),
        }
    }

    fn entry<'a>(content: &'a Content, key: &str) -> &'a Content {
        match content {
            Content::OrderedMapping(map) => &map.entries[key],
            other => panic!("expected ordered mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_same_order() {
        let result = Aligner::new().align(&ordered(&["a", "b", "c"]), &ordered(&["a", "b", "c"]));
        assert_eq!(result_keys(&result), vec!["a", "b", "c"]);
        assert_eq!(count_errors(&result), ErrorWarningCount::ZERO);
    }

    #[test]
    fn test_swapped_keys_reported_once_each() {
        let result = Aligner::new().align(&ordered(&["a", "b"]), &ordered(&["b", "a"]));
        assert_eq!(result_keys(&result), vec!["a", "b"]);
        for key in ["a", "b"] {
            match entry(&result, key) {
                Content::Annotation(a) => assert_eq!(a.kind(), ErrorKind::ReorderedEntry),
                other => panic!("expected annotation, got {:?}", other),
            }
        }
        assert_eq!(count_errors(&result), ErrorWarningCount::new(2, 0));
    }

    #[test]
    fn test_missing_keys() {
        let result = Aligner::new().align(&ordered(&["a", "b"]), &ordered(&["a", "c", "d"]));
        assert_eq!(result_keys(&result), vec!["a", "b", "c", "d"]);
        match entry(&result, "b") {
            Content::Mismatch(m) => {
                assert_eq!(m.kind(), ErrorKind::MissingEntry);
                assert_eq!(m.lone_side(), Some(Side::Left));
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
        match entry(&result, "d") {
            Content::Mismatch(m) => assert_eq!(m.lone_side(), Some(Side::Right)),
            other => panic!("expected mismatch, got {:?}", other),
        }
        assert_eq!(count_errors(&result), ErrorWarningCount::new(3, 0));
    }

    #[test]
    fn test_deleted_key_shifts_followers() {
        let result = Aligner::new().align(&ordered(&["a", "b", "c"]), &ordered(&["b", "c"]));
        assert_eq!(result_keys(&result), vec!["a", "b", "c"]);
        assert!(entry(&result, "a").is_mismatch());
        assert!(matches!(entry(&result, "b"), Content::Annotation(_)));
        assert!(matches!(entry(&result, "c"), Content::Annotation(_)));
    }

    #[test]
    fn test_reordered_value_still_aligned() {
        let left = Content::ordered_mapping([("a", Content::leaf("1")), ("b", Content::leaf("2"))]);
        let right = Content::ordered_mapping([("b", Content::leaf("2")), ("a", Content::leaf("9"))]);
        let result = Aligner::new().align(&left, &right);
        match entry(&result, "a") {
            Content::Annotation(a) => assert!(a.value().is_mismatch()),
            other => panic!("expected annotation, got {:?}", other),
        }
        assert_eq!(count_errors(&result), ErrorWarningCount::new(3, 0));
    }
}
