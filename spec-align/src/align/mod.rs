//! Tree alignment.
//!
//! The aligner walks two raw trees side by side and builds one merged tree in
//! which every disagreement is recorded. Pairs of the same ordinary variant
//! are handled by the per-variant algorithms below; every other pair goes to
//! the special-case resolver.
//!
//! Alignment is pure: inputs are only borrowed and never modified, and every
//! call builds a fresh tree. Independent root pairs can therefore be aligned
//! on separate threads without any coordination.

mod fuzzy;
mod mapping;
mod multiset;
mod ordered;
mod sequence;
mod special;

pub use fuzzy::{edit_distance, find_closest_key};

use tracing::debug;

use crate::config::AlignConfig;
use crate::content::{Content, Leaf, Mismatch, Origin, Side};
use crate::count::{count_errors, ErrorWarningCount};
use crate::error::{Error, Result};
use crate::ingest::Document;
use crate::taxonomy::ErrorKind;

/// Aligns pairs of content trees.
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    config: AlignConfig,
}

impl Aligner {
    /// Creates an aligner with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AlignConfig::default())
    }

    /// Creates an aligner with a custom configuration.
    pub fn with_config(config: AlignConfig) -> Self {
        Aligner { config }
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Aligns two trees into one annotated tree.
    ///
    /// Never fails: any pair that cannot be unified becomes a Mismatch.
    pub fn align(&self, left: &Content, right: &Content) -> Content {
        match (left, right) {
            (Content::Leaf(l), Content::Leaf(r)) => align_leaf(l, r),
            (Content::Sequence(l), Content::Sequence(r)) => sequence::align(self, l, r),
            (Content::Multiset(l), Content::Multiset(r)) => multiset::align(self, l, r),
            (Content::Mapping(l), Content::Mapping(r)) => mapping::align(self, l, r),
            (Content::OrderedMapping(l), Content::OrderedMapping(r)) => {
                ordered::align(self, l, r)
            }
            _ => special::resolve(left, right),
        }
    }

    /// Aligns two trees after checking that both are raw.
    pub fn try_align(&self, left: &Content, right: &Content) -> Result<Content> {
        ensure_raw(left, Side::Left)?;
        ensure_raw(right, Side::Right)?;
        Ok(self.align(left, right))
    }

    /// Aligns two documents and counts the errors and warnings of the result.
    ///
    /// Both roots must be raw records.
    pub fn align_documents(&self, left: &Document, right: &Document) -> Result<Alignment> {
        for (doc, side) in [(left, Side::Left), (right, Side::Right)] {
            if !doc.root.is_record() {
                return Err(Error::InvalidRoot {
                    side,
                    found: doc.root.kind_name(),
                });
            }
            ensure_raw(&doc.root, side)?;
        }

        debug!(left = %left.name, right = %right.name, "aligning documents");
        let tree = self.align(&left.root, &right.root);
        let counts = count_errors(&tree);
        debug!(
            errors = counts.errors,
            warnings = counts.warnings,
            "alignment finished"
        );

        Ok(Alignment {
            left_name: left.name.clone(),
            right_name: right.name.clone(),
            tree,
            counts,
        })
    }

    /// Finds the candidate closest to `key` using the configured threshold.
    pub fn find_closest_key<'a, I>(&self, candidates: I, key: &str) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        find_closest_key(candidates, key, self.config.fuzzy_threshold())
    }
}

/// Aligns two trees with the default configuration.
pub fn align(left: &Content, right: &Content) -> Content {
    Aligner::new().align(left, right)
}

/// The result of aligning two documents, ready for reporting.
#[derive(Debug, Clone)]
pub struct Alignment {
    pub left_name: String,
    pub right_name: String,
    /// The merged tree.
    pub tree: Content,
    /// Errors and warnings over the whole tree.
    pub counts: ErrorWarningCount,
}

impl Alignment {
    /// Returns true when the documents correspond, warnings aside.
    pub fn is_success(&self) -> bool {
        !self.counts.has_errors()
    }
}

fn ensure_raw(content: &Content, side: Side) -> Result<()> {
    if content.is_raw() {
        Ok(())
    } else {
        Err(Error::AlignedInput { side })
    }
}

fn align_leaf(left: &Leaf, right: &Leaf) -> Content {
    if left != right {
        return Mismatch::both(
            Content::Leaf(left.clone()),
            Content::Leaf(right.clone()),
            ErrorKind::NotSameText,
        )
        .into();
    }
    Content::Leaf(Leaf {
        value: left.value.clone(),
        origin: Origin::pair(&left.origin, &right.origin),
    })
}
