//! Alignment of ordered sequences.
//!
//! Sequences of equal length are zipped index by index. Otherwise the shorter
//! sequence is assumed to be the longer one with some elements inserted: each
//! element of the shorter sequence is tried against the next unconsumed
//! element of the longer one, and every element of the longer sequence that
//! fails is reported as an insertion. Reordering is never assumed; unordered
//! data belongs in a multiset.

use super::Aligner;
use crate::content::{Content, Mismatch, Origin, Sequence, Side};
use crate::taxonomy::ErrorKind;

pub(crate) fn align(aligner: &Aligner, left: &Sequence, right: &Sequence) -> Content {
    let origin = Origin::pair(&left.origin, &right.origin);

    if left.items.len() == right.items.len() {
        let items = left
            .items
            .iter()
            .zip(&right.items)
            .map(|(l, r)| aligner.align(l, r))
            .collect();
        return Content::Sequence(Sequence { items, origin });
    }

    let (small, big, small_side) = if left.items.len() < right.items.len() {
        (&left.items, &right.items, Side::Left)
    } else {
        (&right.items, &left.items, Side::Right)
    };
    let big_side = small_side.other();

    let align_pair = |small_item: &Content, big_item: &Content| match small_side {
        Side::Left => aligner.align(small_item, big_item),
        Side::Right => aligner.align(big_item, small_item),
    };
    let missing = |side: Side, item: &Content| -> Content {
        Mismatch::only(side, item.clone(), ErrorKind::MissingInSequence).into()
    };

    let mut items = Vec::with_capacity(big.len());
    let mut next = 0;

    'small: for (index, element) in small.iter().enumerate() {
        while next < big.len() {
            let candidate = &big[next];
            next += 1;
            let aligned = align_pair(element, candidate);
            if !aligned.is_mismatch() {
                items.push(aligned);
                continue 'small;
            }
            items.push(missing(big_side, candidate));
        }
        // The longer sequence ran out: nothing left of the shorter one can match.
        items.extend(small[index..].iter().map(|item| missing(small_side, item)));
        break;
    }

    items.extend(big[next..].iter().map(|item| missing(big_side, item)));

    Content::Sequence(Sequence { items, origin })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::{count_errors, ErrorWarningCount};

    fn leaves(values: &[&str]) -> Content {
        Content::sequence(values.iter().map(|v| Content::leaf(*v)).collect())
    }

    fn items(content: &Content) -> &[Content] {
        match content {
            Content::Sequence(seq) => &seq.items,
            other => panic!("expected sequence, got {:?}", other),
        }
    }

    fn lone(content: &Content) -> (Side, ErrorKind, &Content) {
        match content {
            Content::Mismatch(m) => {
                let side = m.lone_side().expect("one-sided mismatch");
                (side, m.kind(), m.side(side).unwrap())
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_equal_length_zip() {
        let aligner = Aligner::new();
        let result = aligner.align(&leaves(&["1", "2"]), &leaves(&["1", "3"]));
        let items = items(&result);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], Content::leaf("1"));
        assert!(items[1].is_mismatch());
        assert_eq!(count_errors(&result), ErrorWarningCount::new(1, 0));
    }

    #[test]
    fn test_equal_length_no_drift_tolerated() {
        let result = Aligner::new().align(&leaves(&["a", "b"]), &leaves(&["b", "a"]));
        assert_eq!(count_errors(&result), ErrorWarningCount::new(2, 0));
    }

    #[test]
    fn test_insertion_on_right() {
        let result = Aligner::new().align(&leaves(&["1", "2", "3"]), &leaves(&["1", "X", "2", "3"]));
        let items = items(&result);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], Content::leaf("1"));
        assert_eq!(
            lone(&items[1]),
            (Side::Right, ErrorKind::MissingInSequence, &Content::leaf("X"))
        );
        assert_eq!(items[2], Content::leaf("2"));
        assert_eq!(items[3], Content::leaf("3"));
        assert_eq!(count_errors(&result), ErrorWarningCount::new(1, 0));
    }

    #[test]
    fn test_insertion_on_left() {
        let result = Aligner::new().align(&leaves(&["X", "1", "2"]), &leaves(&["1", "2"]));
        let items = items(&result);
        assert_eq!(
            lone(&items[0]),
            (Side::Left, ErrorKind::MissingInSequence, &Content::leaf("X"))
        );
        assert_eq!(items[1], Content::leaf("1"));
        assert_eq!(items[2], Content::leaf("2"));
    }

    #[test]
    fn test_trailing_insertions_reported() {
        let result = Aligner::new().align(&leaves(&["1"]), &leaves(&["1", "2", "3"]));
        let items = items(&result);
        assert_eq!(items.len(), 3);
        assert_eq!(lone(&items[1]).0, Side::Right);
        assert_eq!(lone(&items[2]).0, Side::Right);
        assert_eq!(count_errors(&result), ErrorWarningCount::new(2, 0));
    }

    #[test]
    fn test_big_exhausted_reports_rest_of_small() {
        // "9" never matches, so every element of the right sequence is an
        // insertion and the left elements from "9" on are missing.
        let result = Aligner::new().align(&leaves(&["9", "1"]), &leaves(&["1", "2", "3"]));
        let items = items(&result);
        assert_eq!(items.len(), 5);
        for item in &items[..3] {
            assert_eq!(lone(item).0, Side::Right);
        }
        assert_eq!(lone(&items[3]), (Side::Left, ErrorKind::MissingInSequence, &Content::leaf("9")));
        assert_eq!(lone(&items[4]), (Side::Left, ErrorKind::MissingInSequence, &Content::leaf("1")));
        assert_eq!(count_errors(&result), ErrorWarningCount::new(5, 0));
    }

    #[test]
    fn test_wildcard_does_not_stop_insertion_walk() {
        // A wildcard match is still a mismatch, so the walk moves past every
        // element of the longer sequence.
        let left = Content::sequence(vec![Content::wildcard(), Content::leaf("2")]);
        let right = leaves(&["1", "2", "3"]);
        let result = Aligner::new().align(&left, &right);
        let items = items(&result);
        assert_eq!(items.len(), 5);
        for item in &items[..3] {
            assert_eq!(lone(item).0, Side::Right);
        }
        assert_eq!(lone(&items[3]), (Side::Left, ErrorKind::MissingInSequence, &Content::wildcard()));
        assert_eq!(lone(&items[4]), (Side::Left, ErrorKind::MissingInSequence, &Content::leaf("2")));
        assert_eq!(count_errors(&result), ErrorWarningCount::new(5, 0));
    }

    #[test]
    fn test_wildcard_in_equal_length_zip() {
        let left = Content::sequence(vec![Content::wildcard(), Content::leaf("2")]);
        let result = Aligner::new().align(&left, &leaves(&["1", "2"]));
        assert_eq!(count_errors(&result), ErrorWarningCount::new(0, 1));
    }
}
