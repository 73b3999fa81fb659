//! The generic document tree.
//!
//! Every node of both input trees and of the aligned tree is a [`Content`].
//! The first six variants make up raw input trees; [`Mismatch`] and
//! [`Annotation`] only ever appear in a tree produced by the aligner.
//!
//! Trees are acyclic by construction: a node owns its children and no
//! variant can refer back to an ancestor.

mod mismatch;
pub mod position;

pub use mismatch::{Annotation, Mismatch};
pub use position::{LineRange, Marker, Origin, PosRef, Position, UrlPosition};

use std::fmt;

use indexmap::IndexMap;
use md5::{Digest, Md5};
use rustc_hash::FxHashSet;

use crate::constants::INSIGNIFICANT_CHARS;
use crate::error::{Error, Result};

/// Structural 128-bit fingerprint of a tree, positions excluded.
pub type Fingerprint = [u8; 16];

/// One of the two documents being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the opposite side.
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// A node of a document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Atomic text value.
    Leaf(Leaf),
    /// Order-significant list.
    Sequence(Sequence),
    /// Order-insignificant bag, compared as a set.
    Multiset(Multiset),
    /// Unordered string-keyed record.
    Mapping(Mapping),
    /// String-keyed record whose key order is data.
    OrderedMapping(OrderedMapping),
    /// Placeholder matching anything.
    Wildcard(Wildcard),
    /// Point where the two trees could not be unified.
    Mismatch(Mismatch),
    /// Successful alignment carrying a flagged issue.
    Annotation(Annotation),
}

impl Content {
    /// Creates a leaf.
    pub fn leaf(value: impl Into<String>) -> Self {
        Content::Leaf(Leaf::new(value))
    }

    /// Creates a sequence.
    pub fn sequence(items: Vec<Content>) -> Self {
        Content::Sequence(Sequence::new(items))
    }

    /// Creates a multiset.
    pub fn multiset(items: Vec<Content>) -> Self {
        Content::Multiset(Multiset::new(items))
    }

    /// Creates a mapping. A repeated key keeps its last value.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Content)>,
    {
        Content::Mapping(Mapping::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Creates an ordered mapping whose key order is the iteration order.
    pub fn ordered_mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Content)>,
    {
        Content::OrderedMapping(OrderedMapping::new(
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    /// Creates a wildcard.
    pub fn wildcard() -> Self {
        Content::Wildcard(Wildcard::default())
    }

    /// Returns this node with a raw position attached.
    pub fn with_position<P: Position + 'static>(self, position: P) -> Self {
        self.with_origin(Origin::raw(position))
    }

    /// Returns this node with the given origin.
    pub fn with_origin(mut self, origin: Origin) -> Self {
        match &mut self {
            Content::Leaf(n) => n.origin = origin,
            Content::Sequence(n) => n.origin = origin,
            Content::Multiset(n) => n.origin = origin,
            Content::Mapping(n) => n.origin = origin,
            Content::OrderedMapping(n) => n.origin = origin,
            Content::Wildcard(n) => n.origin = origin,
            Content::Mismatch(n) => n.set_origin(origin),
            Content::Annotation(n) => n.set_origin(origin),
        }
        self
    }

    /// Returns the origin of this node.
    pub fn origin(&self) -> &Origin {
        match self {
            Content::Leaf(n) => &n.origin,
            Content::Sequence(n) => &n.origin,
            Content::Multiset(n) => &n.origin,
            Content::Mapping(n) => &n.origin,
            Content::OrderedMapping(n) => &n.origin,
            Content::Wildcard(n) => &n.origin,
            Content::Mismatch(n) => n.origin(),
            Content::Annotation(n) => n.origin(),
        }
    }

    /// Returns the variant name used in reports and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Content::Leaf(_) => "Leaf",
            Content::Sequence(_) => "Sequence",
            Content::Multiset(_) => "Multiset",
            Content::Mapping(_) => "Mapping",
            Content::OrderedMapping(_) => "OrderedMapping",
            Content::Wildcard(_) => "Wildcard",
            Content::Mismatch(_) => "Mismatch",
            Content::Annotation(_) => "Annotation",
        }
    }

    /// Returns true if this is a mismatch node.
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Content::Mismatch(_))
    }

    /// Returns true if the tree contains no alignment result nodes.
    pub fn is_raw(&self) -> bool {
        match self {
            Content::Leaf(_) | Content::Wildcard(_) => true,
            Content::Sequence(s) => s.items.iter().all(Content::is_raw),
            Content::Multiset(m) => m.items.iter().all(Content::is_raw),
            Content::Mapping(m) => m.entries.values().all(Content::is_raw),
            Content::OrderedMapping(m) => m.entries.values().all(Content::is_raw),
            Content::Mismatch(_) | Content::Annotation(_) => false,
        }
    }

    /// Returns true for Mapping and OrderedMapping.
    pub fn is_record(&self) -> bool {
        matches!(self, Content::Mapping(_) | Content::OrderedMapping(_))
    }

    /// Computes the structural fingerprint of this tree.
    ///
    /// Two trees that are equal have the same fingerprint: leaves hash their
    /// normalized text, multisets hash the sorted set of their element
    /// fingerprints and mappings hash their entries sorted by key.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = Md5::new();
        self.feed(&mut hasher);
        hasher.finalize().into()
    }

    fn feed(&self, hasher: &mut Md5) {
        match self {
            Content::Leaf(leaf) => {
                hasher.update(b"L");
                feed_str(hasher, &leaf.normalized());
            }
            Content::Sequence(seq) => {
                hasher.update(b"S");
                hasher.update((seq.items.len() as u64).to_le_bytes());
                for item in &seq.items {
                    item.feed(hasher);
                }
            }
            Content::Multiset(set) => {
                let prints = set.distinct_fingerprints();
                let mut prints: Vec<Fingerprint> = prints.into_iter().collect();
                prints.sort_unstable();
                hasher.update(b"B");
                hasher.update((prints.len() as u64).to_le_bytes());
                for print in &prints {
                    hasher.update(print);
                }
            }
            Content::Mapping(map) => {
                let mut keys: Vec<&String> = map.entries.keys().collect();
                keys.sort();
                hasher.update(b"M");
                hasher.update((keys.len() as u64).to_le_bytes());
                for key in keys {
                    feed_str(hasher, key);
                    map.entries[key].feed(hasher);
                }
            }
            Content::OrderedMapping(map) => {
                hasher.update(b"O");
                hasher.update((map.entries.len() as u64).to_le_bytes());
                for (key, value) in &map.entries {
                    feed_str(hasher, key);
                    value.feed(hasher);
                }
            }
            Content::Wildcard(_) => hasher.update(b"W"),
            Content::Mismatch(m) => {
                hasher.update(b"X");
                feed_str(hasher, m.kind().tag_name());
                for side in [m.left(), m.right()] {
                    match side {
                        Some(content) => {
                            hasher.update(b"+");
                            content.feed(hasher);
                        }
                        None => hasher.update(b"-"),
                    }
                }
            }
            Content::Annotation(a) => {
                hasher.update(b"A");
                feed_str(hasher, a.kind().tag_name());
                a.value().feed(hasher);
            }
        }
    }
}

fn feed_str(hasher: &mut Md5, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

/// Atomic text value.
#[derive(Debug, Clone, Default)]
pub struct Leaf {
    pub value: String,
    pub origin: Origin,
}

impl Leaf {
    pub fn new(value: impl Into<String>) -> Self {
        Leaf {
            value: value.into(),
            origin: Origin::Unknown,
        }
    }

    /// Characters of the value that take part in equality.
    fn significant_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.value
            .chars()
            .filter(|c| !INSIGNIFICANT_CHARS.contains(c))
    }

    /// Returns the value with insignificant characters removed.
    pub fn normalized(&self) -> String {
        self.significant_chars().collect()
    }
}

impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        self.significant_chars().eq(other.significant_chars())
    }
}

impl Eq for Leaf {}

/// Order-significant list.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    pub items: Vec<Content>,
    pub origin: Origin,
}

impl Sequence {
    pub fn new(items: Vec<Content>) -> Self {
        Sequence {
            items,
            origin: Origin::Unknown,
        }
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for Sequence {}

/// Bag of content compared as a set.
///
/// Elements are kept in a list so that iteration stays deterministic.
#[derive(Debug, Clone, Default)]
pub struct Multiset {
    pub items: Vec<Content>,
    pub origin: Origin,
}

impl Multiset {
    pub fn new(items: Vec<Content>) -> Self {
        Multiset {
            items,
            origin: Origin::Unknown,
        }
    }

    /// Returns the set of element fingerprints.
    pub fn distinct_fingerprints(&self) -> FxHashSet<Fingerprint> {
        self.items.iter().map(Content::fingerprint).collect()
    }
}

impl PartialEq for Multiset {
    fn eq(&self, other: &Self) -> bool {
        self.distinct_fingerprints() == other.distinct_fingerprints()
    }
}

impl Eq for Multiset {}

/// Unordered string-keyed record.
///
/// Entries iterate in insertion order, which only matters for tie-breaking
/// during fuzzy key matching and for report output.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    pub entries: IndexMap<String, Content>,
    pub origin: Origin,
}

impl Mapping {
    pub fn new(entries: IndexMap<String, Content>) -> Self {
        Mapping {
            entries,
            origin: Origin::Unknown,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Content> {
        self.entries.get(key)
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.entries.get(key) == Some(value))
    }
}

impl Eq for Mapping {}

/// String-keyed record whose key order is itself data.
#[derive(Debug, Clone, Default)]
pub struct OrderedMapping {
    pub entries: IndexMap<String, Content>,
    pub origin: Origin,
}

impl OrderedMapping {
    /// Creates an ordered mapping keeping the iteration order of `entries`.
    pub fn new(entries: IndexMap<String, Content>) -> Self {
        OrderedMapping {
            entries,
            origin: Origin::Unknown,
        }
    }

    /// Creates an ordered mapping from entries and an explicit key order.
    ///
    /// `order` must list every key of `entries` exactly once.
    pub fn from_parts(mut entries: IndexMap<String, Content>, order: &[String]) -> Result<Self> {
        let mut ordered = IndexMap::with_capacity(entries.len());
        for key in order {
            match entries.swap_remove_entry(key.as_str()) {
                Some((key, value)) => {
                    ordered.insert(key, value);
                }
                None if ordered.contains_key(key.as_str()) => {
                    return Err(Error::InvalidKeyOrder(format!("key `{}` listed twice", key)));
                }
                None => {
                    return Err(Error::InvalidKeyOrder(format!("key `{}` has no entry", key)));
                }
            }
        }
        if let Some(key) = entries.keys().next() {
            return Err(Error::InvalidKeyOrder(format!(
                "key `{}` is missing from the order",
                key
            )));
        }
        Ok(OrderedMapping::new(ordered))
    }

    pub fn get(&self, key: &str) -> Option<&Content> {
        self.entries.get(key)
    }

    /// Returns the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl PartialEq for OrderedMapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
    }
}

impl Eq for OrderedMapping {}

/// Placeholder that matches any content.
#[derive(Debug, Clone, Default)]
pub struct Wildcard {
    pub origin: Origin,
}

impl PartialEq for Wildcard {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Wildcard {}

impl From<Leaf> for Content {
    fn from(leaf: Leaf) -> Self {
        Content::Leaf(leaf)
    }
}

impl From<Mismatch> for Content {
    fn from(mismatch: Mismatch) -> Self {
        Content::Mismatch(mismatch)
    }
}

impl From<Annotation> for Content {
    fn from(annotation: Annotation) -> Self {
        Content::Annotation(annotation)
    }
}
