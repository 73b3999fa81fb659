//! Kinds of disagreement found while aligning two trees.

use std::fmt;

use serde::Serialize;

/// Kind of a disagreement, carried by every Mismatch and Annotation.
///
/// Each kind is either an error (alignment failed or something is missing)
/// or a warning (alignment succeeded but a soft issue was noted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Two leaves hold different text.
    NotSameText,
    /// An element of one sequence has no counterpart in the other.
    MissingInSequence,
    /// An element of one multiset has no counterpart in the other.
    MissingInMultiset,
    /// A mapping key exists on one side only.
    MissingEntry,
    /// Reserved for producers that attach priorities.
    PrioritiesDiffer,
    /// A wildcard absorbed the other side.
    WildcardMatched,
    /// The two nodes are different variants.
    TypeMismatch,
    /// A key or element was paired with a differently spelled counterpart.
    MisspelledEntry,
    /// An ordered key was found at another position.
    ReorderedEntry,
    /// A same-variant pair had no alignment handler.
    Unknown,
}

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 10] = [
        ErrorKind::NotSameText,
        ErrorKind::MissingInSequence,
        ErrorKind::MissingInMultiset,
        ErrorKind::MissingEntry,
        ErrorKind::PrioritiesDiffer,
        ErrorKind::WildcardMatched,
        ErrorKind::TypeMismatch,
        ErrorKind::MisspelledEntry,
        ErrorKind::ReorderedEntry,
        ErrorKind::Unknown,
    ];

    /// Returns true if this kind counts as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorKind::WildcardMatched)
    }

    /// Returns true if this kind counts as an error.
    pub fn is_error(&self) -> bool {
        !self.is_warning()
    }

    /// Returns the stable tag used in machine-readable output.
    pub fn tag_name(&self) -> &'static str {
        match self {
            ErrorKind::NotSameText => "not-same-text",
            ErrorKind::MissingInSequence => "missing-in-sequence",
            ErrorKind::MissingInMultiset => "missing-in-multiset",
            ErrorKind::MissingEntry => "missing-entry",
            ErrorKind::PrioritiesDiffer => "priorities-differ",
            ErrorKind::WildcardMatched => "wildcard-matched",
            ErrorKind::TypeMismatch => "type-mismatch",
            ErrorKind::MisspelledEntry => "misspelled-entry",
            ErrorKind::ReorderedEntry => "reordered-entry",
            ErrorKind::Unknown => "unknown",
        }
    }

    /// Returns the human label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::NotSameText => "Not same text",
            ErrorKind::MissingInSequence => "Missing in sequence",
            ErrorKind::MissingInMultiset => "Missing in multiset",
            ErrorKind::MissingEntry => "Missing entry",
            ErrorKind::PrioritiesDiffer => "Priorities differ",
            ErrorKind::WildcardMatched => "Wildcard matched",
            ErrorKind::TypeMismatch => "Type mismatch",
            ErrorKind::MisspelledEntry => "Misspelled entry",
            ErrorKind::ReorderedEntry => "Reordered entry",
            ErrorKind::Unknown => "Unknown error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
