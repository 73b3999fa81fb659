//! Nodes that only appear in an aligned tree.

use super::{Content, Origin, Side};
use crate::error::{Error, Result};
use crate::taxonomy::ErrorKind;

/// Records that alignment could not continue below this point.
///
/// At least one side is always present: a mismatch with two absent sides
/// cannot be constructed.
#[derive(Debug, Clone)]
pub struct Mismatch {
    left: Option<Box<Content>>,
    right: Option<Box<Content>>,
    kind: ErrorKind,
    origin: Origin,
}

impl Mismatch {
    /// Creates a mismatch, rejecting one with neither side present.
    pub fn new(left: Option<Content>, right: Option<Content>, kind: ErrorKind) -> Result<Self> {
        if left.is_none() && right.is_none() {
            return Err(Error::EmptyMismatch);
        }
        Ok(Self::from_sides(left, right, kind))
    }

    /// Creates a mismatch between two present nodes.
    pub fn both(left: Content, right: Content, kind: ErrorKind) -> Self {
        Self::from_sides(Some(left), Some(right), kind)
    }

    /// Creates a mismatch for a node found only in the left document.
    pub fn left_only(left: Content, kind: ErrorKind) -> Self {
        Self::from_sides(Some(left), None, kind)
    }

    /// Creates a mismatch for a node found only in the right document.
    pub fn right_only(right: Content, kind: ErrorKind) -> Self {
        Self::from_sides(None, Some(right), kind)
    }

    /// Creates a mismatch for a node found only on `side`.
    pub fn only(side: Side, content: Content, kind: ErrorKind) -> Self {
        match side {
            Side::Left => Self::left_only(content, kind),
            Side::Right => Self::right_only(content, kind),
        }
    }

    fn from_sides(left: Option<Content>, right: Option<Content>, kind: ErrorKind) -> Self {
        let origin = Origin::Aligned {
            left: left.as_ref().and_then(|c| c.origin().primary()),
            right: right.as_ref().and_then(|c| c.origin().primary()),
        };
        Mismatch {
            left: left.map(Box::new),
            right: right.map(Box::new),
            kind,
            origin,
        }
    }

    pub fn left(&self) -> Option<&Content> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Content> {
        self.right.as_deref()
    }

    /// Returns the node on the given side, if present.
    pub fn side(&self, side: Side) -> Option<&Content> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub(crate) fn set_origin(&mut self, origin: Origin) {
        self.origin = origin;
    }

    /// Returns the only present side, or `None` when both are present.
    pub fn lone_side(&self) -> Option<Side> {
        match (&self.left, &self.right) {
            (Some(_), None) => Some(Side::Left),
            (None, Some(_)) => Some(Side::Right),
            _ => None,
        }
    }
}

impl PartialEq for Mismatch {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.left == other.left && self.right == other.right
    }
}

impl Eq for Mismatch {}

/// Wraps an aligned subtree that deserves flagging.
#[derive(Debug, Clone)]
pub struct Annotation {
    value: Box<Content>,
    kind: ErrorKind,
    origin: Origin,
}

impl Annotation {
    pub fn new(value: Content, kind: ErrorKind) -> Self {
        let origin = value.origin().clone();
        Annotation {
            value: Box::new(value),
            kind,
            origin,
        }
    }

    /// Returns the wrapped aligned subtree.
    pub fn value(&self) -> &Content {
        &self.value
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub(crate) fn set_origin(&mut self, origin: Origin) {
        self.origin = origin;
    }
}

impl PartialEq for Annotation {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Annotation {}
