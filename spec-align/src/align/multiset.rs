//! Alignment of multisets.
//!
//! Elements equal on both sides are paired first. What remains is grouped by
//! variant; a lone leftover on each side of a variant is tried as a pair,
//! anything more ambiguous is reported element by element rather than
//! guessed.

use indexmap::IndexMap;

use super::Aligner;
use crate::content::{Annotation, Content, Fingerprint, Mismatch, Multiset, Origin, Side};
use crate::taxonomy::ErrorKind;

/// Leftover elements of one variant on both sides.
#[derive(Default)]
struct Leftovers<'a> {
    left: Vec<&'a Content>,
    right: Vec<&'a Content>,
}

pub(crate) fn align(aligner: &Aligner, left: &Multiset, right: &Multiset) -> Content {
    let left_prints: Vec<Fingerprint> = left.items.iter().map(Content::fingerprint).collect();
    let right_prints: Vec<Fingerprint> = right.items.iter().map(Content::fingerprint).collect();

    let mut items = Vec::with_capacity(left.items.len().max(right.items.len()));
    let mut left_paired = vec![false; left.items.len()];
    let mut right_paired = vec![false; right.items.len()];

    // Pair each left element with the first equal right element still free.
    for (i, print) in left_prints.iter().enumerate() {
        let free = (0..right.items.len()).find(|&j| !right_paired[j] && right_prints[j] == *print);
        if let Some(j) = free {
            left_paired[i] = true;
            right_paired[j] = true;
            items.push(aligner.align(&left.items[i], &right.items[j]));
        }
    }

    // Multiplicity is not tracked: a surplus copy of an element present on
    // the other side aligns with its first equal counterpart.
    for (i, print) in left_prints.iter().enumerate() {
        if left_paired[i] {
            continue;
        }
        if let Some(j) = right_prints.iter().position(|p| p == print) {
            left_paired[i] = true;
            items.push(aligner.align(&left.items[i], &right.items[j]));
        }
    }
    for (j, print) in right_prints.iter().enumerate() {
        if right_paired[j] {
            continue;
        }
        if let Some(i) = left_prints.iter().position(|p| p == print) {
            right_paired[j] = true;
            items.push(aligner.align(&left.items[i], &right.items[j]));
        }
    }

    let mut groups: IndexMap<&'static str, Leftovers<'_>> = IndexMap::new();
    for (item, _) in left.items.iter().zip(&left_paired).filter(|(_, paired)| !**paired) {
        groups.entry(item.kind_name()).or_default().left.push(item);
    }
    for (item, _) in right.items.iter().zip(&right_paired).filter(|(_, paired)| !**paired) {
        groups.entry(item.kind_name()).or_default().right.push(item);
    }

    for group in groups.into_values() {
        match (group.left.as_slice(), group.right.as_slice()) {
            ([l], [r]) => {
                let attempt = aligner.align(l, r);
                if attempt.is_mismatch() {
                    items.push(missing(Side::Left, l));
                    items.push(missing(Side::Right, r));
                } else {
                    items.push(Annotation::new(attempt, ErrorKind::MisspelledEntry).into());
                }
            }
            (lefts, rights) => {
                items.extend(lefts.iter().map(|item| missing(Side::Left, item)));
                items.extend(rights.iter().map(|item| missing(Side::Right, item)));
            }
        }
    }

    Content::Multiset(Multiset {
        items,
        origin: Origin::pair(&left.origin, &right.origin),
    })
}

fn missing(side: Side, item: &Content) -> Content {
    Mismatch::only(side, item.clone(), ErrorKind::MissingInMultiset).into()
}
