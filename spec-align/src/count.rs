//! Error and warning aggregation over an aligned tree.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::Serialize;

use crate::content::Content;
use crate::taxonomy::ErrorKind;

/// Number of errors and warnings found in a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorWarningCount {
    pub errors: usize,
    pub warnings: usize,
}

impl ErrorWarningCount {
    /// No errors, no warnings.
    pub const ZERO: ErrorWarningCount = ErrorWarningCount {
        errors: 0,
        warnings: 0,
    };

    pub fn new(errors: usize, warnings: usize) -> Self {
        ErrorWarningCount { errors, warnings }
    }

    /// Count of a single flagged node of the given kind.
    pub fn of_kind(kind: ErrorKind) -> Self {
        if kind.is_error() {
            ErrorWarningCount::new(1, 0)
        } else {
            ErrorWarningCount::new(0, 1)
        }
    }

    /// Returns true when there is nothing to report.
    pub fn is_clean(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

impl Add for ErrorWarningCount {
    type Output = ErrorWarningCount;

    fn add(self, other: Self) -> Self::Output {
        ErrorWarningCount {
            errors: self.errors + other.errors,
            warnings: self.warnings + other.warnings,
        }
    }
}

impl AddAssign for ErrorWarningCount {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for ErrorWarningCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for ErrorWarningCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} errors, {} warnings)", self.errors, self.warnings)
    }
}

/// Counts the errors and warnings of an aligned tree.
///
/// A Mismatch counts once by its kind; the raw nodes it holds are not
/// inspected. An Annotation counts once by its own kind, plus whatever the
/// aligned subtree it wraps contains.
pub fn count_errors(node: &Content) -> ErrorWarningCount {
    match node {
        Content::Leaf(_) | Content::Wildcard(_) => ErrorWarningCount::ZERO,
        Content::Sequence(seq) => seq.items.iter().map(count_errors).sum(),
        Content::Multiset(set) => set.items.iter().map(count_errors).sum(),
        Content::Mapping(map) => map.entries.values().map(count_errors).sum(),
        Content::OrderedMapping(map) => map.entries.values().map(count_errors).sum(),
        Content::Mismatch(m) => ErrorWarningCount::of_kind(m.kind()),
        Content::Annotation(a) => ErrorWarningCount::of_kind(a.kind()) + count_errors(a.value()),
    }
}

impl Content {
    /// Counts the errors and warnings of this tree.
    pub fn count_errors(&self) -> ErrorWarningCount {
        count_errors(self)
    }
}
