//! Alignment of unordered records.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::trace;

use super::Aligner;
use crate::content::{Annotation, Content, Mapping, Mismatch, Origin, Side};
use crate::taxonomy::ErrorKind;

/// Aligns two mappings.
///
/// Shared keys align directly. A key found on the left only is matched
/// against the right-only keys not consumed yet; a close enough candidate
/// whose value aligns without a mismatch becomes a misspelled entry, otherwise the key is
/// missing. Right-only keys left over at the end are missing on the left.
pub(crate) fn align(aligner: &Aligner, left: &Mapping, right: &Mapping) -> Content {
    let mut entries: IndexMap<String, Content> = IndexMap::with_capacity(left.entries.len());

    for (key, value) in &left.entries {
        if let Some(other) = right.entries.get(key) {
            entries.insert(key.clone(), aligner.align(value, other));
        }
    }

    let right_only: Vec<&str> = right
        .entries
        .keys()
        .map(String::as_str)
        .filter(|key| !left.entries.contains_key(*key))
        .collect();
    let mut consumed: FxHashSet<&str> = FxHashSet::default();

    for (key, value) in &left.entries {
        if right.entries.contains_key(key) {
            continue;
        }
        let result = match_renamed(aligner, key, value, right, &right_only, &mut consumed);
        entries.insert(key.clone(), result);
    }

    for key in right_only {
        if consumed.contains(key) {
            continue;
        }
        let missing = Mismatch::only(Side::Right, right.entries[key].clone(), ErrorKind::MissingEntry);
        entries.insert(key.to_string(), missing.into());
    }

    Content::Mapping(Mapping {
        entries,
        origin: Origin::pair(&left.origin, &right.origin),
    })
}

/// Looks for the right-side spelling of a left-only key.
fn match_renamed<'a>(
    aligner: &Aligner,
    key: &str,
    value: &Content,
    right: &'a Mapping,
    right_only: &[&'a str],
    consumed: &mut FxHashSet<&'a str>,
) -> Content {
    let candidates = right_only.iter().copied().filter(|k| !consumed.contains(k));
    let Some(closest) = aligner.find_closest_key(candidates, key) else {
        return Mismatch::only(Side::Left, value.clone(), ErrorKind::MissingEntry).into();
    };

    let attempt = aligner.align(value, &right.entries[closest]);
    if attempt.is_mismatch() {
        trace!(key, candidate = closest, "renamed key rejected, values differ");
        return Mismatch::only(Side::Left, value.clone(), ErrorKind::MissingEntry).into();
    }

    trace!(key, candidate = closest, "key matched as misspelled");
    consumed.insert(closest);
    Annotation::new(attempt, ErrorKind::MisspelledEntry).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::{count_errors, ErrorWarningCount};

    fn entries(content: &Content) -> &IndexMap<String, Content> {
        match content {
            Content::Mapping(map) => &map.entries,
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    fn mismatch_side(content: &Content) -> (ErrorKind, Option<Side>) {
        match content {
            Content::Mismatch(m) => (m.kind(), m.lone_side()),
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_keys_align() {
        let left = Content::mapping([("a", Content::leaf("x")), ("b", Content::leaf("y"))]);
        let right = Content::mapping([("b", Content::leaf("y")), ("a", Content::leaf("x"))]);
        let result = Aligner::new().align(&left, &right);
        assert_eq!(entries(&result).len(), 2);
        assert_eq!(count_errors(&result), ErrorWarningCount::ZERO);
    }

    #[test]
    fn test_missing_keys_on_both_sides() {
        let left = Content::mapping([("a", Content::leaf("x")), ("b", Content::leaf("y"))]);
        let right = Content::mapping([("a", Content::leaf("x")), ("c", Content::leaf("y"))]);
        let result = Aligner::new().align(&left, &right);
        let entries = entries(&result);

        assert_eq!(entries["a"], Content::leaf("x"));
        assert_eq!(
            mismatch_side(&entries["b"]),
            (ErrorKind::MissingEntry, Some(Side::Left))
        );
        assert_eq!(
            mismatch_side(&entries["c"]),
            (ErrorKind::MissingEntry, Some(Side::Right))
        );
        assert_eq!(count_errors(&result), ErrorWarningCount::new(2, 0));
    }

    #[test]
    fn test_misspelled_key() {
        let left = Content::mapping([("length", Content::leaf("3"))]);
        let right = Content::mapping([("lenght", Content::leaf("3"))]);
        let result = Aligner::new().align(&left, &right);
        let entries = entries(&result);

        assert_eq!(entries.len(), 1);
        match &entries["length"] {
            Content::Annotation(a) => {
                assert_eq!(a.kind(), ErrorKind::MisspelledEntry);
                assert_eq!(a.value(), &Content::leaf("3"));
            }
            other => panic!("expected annotation, got {:?}", other),
        }
        assert_eq!(count_errors(&result), ErrorWarningCount::new(1, 0));
    }

    #[test]
    fn test_misspelled_key_with_different_value_is_missing() {
        let left = Content::mapping([("length", Content::leaf("3"))]);
        let right = Content::mapping([("lenght", Content::leaf("4"))]);
        let result = Aligner::new().align(&left, &right);
        let entries = entries(&result);

        assert_eq!(
            mismatch_side(&entries["length"]),
            (ErrorKind::MissingEntry, Some(Side::Left))
        );
        assert_eq!(
            mismatch_side(&entries["lenght"]),
            (ErrorKind::MissingEntry, Some(Side::Right))
        );
    }

    #[test]
    fn test_misspelled_key_with_wildcard_value_is_missing() {
        let left = Content::mapping([("lenght", Content::wildcard())]);
        let right = Content::mapping([("length", Content::leaf("x"))]);
        let result = Aligner::new().align(&left, &right);
        let entries = entries(&result);

        assert_eq!(
            mismatch_side(&entries["lenght"]),
            (ErrorKind::MissingEntry, Some(Side::Left))
        );
        assert_eq!(
            mismatch_side(&entries["length"]),
            (ErrorKind::MissingEntry, Some(Side::Right))
        );
        assert_eq!(count_errors(&result), ErrorWarningCount::new(2, 0));
    }

    #[test]
    fn test_candidate_consumed_once() {
        let left = Content::mapping([
            ("colour", Content::leaf("red")),
            ("colours", Content::leaf("red")),
        ]);
        let right = Content::mapping([("colourz", Content::leaf("red"))]);
        let result = Aligner::new().align(&left, &right);
        let entries = entries(&result);

        assert!(matches!(entries["colour"], Content::Annotation(_)));
        assert_eq!(
            mismatch_side(&entries["colours"]),
            (ErrorKind::MissingEntry, Some(Side::Left))
        );
        assert!(!entries.contains_key("colourz"));
    }

    #[test]
    fn test_zero_threshold_disables_renames() {
        let aligner = Aligner::with_config(
            crate::AlignConfig::new().with_fuzzy_threshold(0.0).unwrap(),
        );
        let left = Content::mapping([("length", Content::leaf("3"))]);
        let right = Content::mapping([("lenght", Content::leaf("3"))]);
        let result = aligner.align(&left, &right);
        assert_eq!(count_errors(&result), ErrorWarningCount::new(2, 0));
    }
}
