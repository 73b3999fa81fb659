//! Source positions attached to content nodes.
//!
//! Positions are opaque to the aligner: it only carries them from the input
//! trees into the aligned tree so that a report can point back at the
//! documents. They never take part in equality or alignment decisions.

use std::fmt;
use std::sync::Arc;

/// A location in a source document.
pub trait Position: fmt::Debug + Send + Sync {
    /// Returns a short human-locatable reference, e.g. `page.html#sec-3`.
    fn reference(&self) -> String;
}

/// Shared handle to a position.
pub type PosRef = Arc<dyn Position>;

/// Where a node comes from.
#[derive(Debug, Clone, Default)]
pub enum Origin {
    /// No position is known.
    #[default]
    Unknown,
    /// A node of a raw input tree.
    Raw(PosRef),
    /// A node of an aligned tree, with one optional position per document.
    Aligned {
        left: Option<PosRef>,
        right: Option<PosRef>,
    },
}

impl Origin {
    /// Creates a raw origin from a position.
    pub fn raw<P: Position + 'static>(position: P) -> Self {
        Origin::Raw(Arc::new(position))
    }

    /// Combines the origins of a left and a right node.
    pub fn pair(left: &Origin, right: &Origin) -> Self {
        Origin::Aligned {
            left: left.primary(),
            right: right.primary(),
        }
    }

    /// Returns the position that best identifies this node.
    pub fn primary(&self) -> Option<PosRef> {
        match self {
            Origin::Unknown => None,
            Origin::Raw(pos) => Some(pos.clone()),
            Origin::Aligned { left, right } => left.clone().or_else(|| right.clone()),
        }
    }

    /// Returns the references of every known position, left first.
    pub fn references(&self) -> Vec<String> {
        match self {
            Origin::Unknown => Vec::new(),
            Origin::Raw(pos) => vec![pos.reference()],
            Origin::Aligned { left, right } => left
                .iter()
                .chain(right.iter())
                .map(|pos| pos.reference())
                .collect(),
        }
    }

    /// Returns true if no position is known.
    pub fn is_unknown(&self) -> bool {
        self.references().is_empty()
    }
}

/// A URL with an optional fragment, used for scraped web pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPosition {
    pub url: String,
    pub fragment: Option<String>,
}

impl UrlPosition {
    pub fn new(url: impl Into<String>, fragment: Option<String>) -> Self {
        UrlPosition {
            url: url.into(),
            fragment,
        }
    }
}

impl Position for UrlPosition {
    fn reference(&self) -> String {
        match &self.fragment {
            Some(fragment) => format!("{}#{}", self.url, fragment),
            None => self.url.clone(),
        }
    }
}

/// An inclusive line range in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRange {
    pub path: String,
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(path: impl Into<String>, start: usize, end: usize) -> Self {
        LineRange {
            path: path.into(),
            start,
            end,
        }
    }
}

impl Position for LineRange {
    fn reference(&self) -> String {
        if self.start == self.end {
            format!("{}:{}", self.path, self.start)
        } else {
            format!("{}:{}-{}", self.path, self.start, self.end)
        }
    }
}

/// A free-form marker, e.g. the label of the document a node came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker(pub String);

impl Position for Marker {
    fn reference(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_references() {
        let url = UrlPosition::new("https://example.org/spec", Some("sec-3".to_string()));
        assert_eq!(url.reference(), "https://example.org/spec#sec-3");
        assert_eq!(UrlPosition::new("a.html", None).reference(), "a.html");
        assert_eq!(LineRange::new("Node.v", 10, 14).reference(), "Node.v:10-14");
        assert_eq!(LineRange::new("Node.v", 7, 7).reference(), "Node.v:7");
        assert_eq!(Marker("left".to_string()).reference(), "left");
    }

    #[test]
    fn test_pair_keeps_both_sides() {
        let left = Origin::raw(Marker("L".to_string()));
        let right = Origin::raw(Marker("R".to_string()));
        let pair = Origin::pair(&left, &right);
        assert_eq!(pair.references(), vec!["L", "R"]);
        assert_eq!(pair.primary().map(|p| p.reference()), Some("L".to_string()));
    }

    #[test]
    fn test_pair_with_unknown_side() {
        let right = Origin::raw(Marker("R".to_string()));
        let pair = Origin::pair(&Origin::Unknown, &right);
        assert_eq!(pair.references(), vec!["R"]);
        assert!(Origin::pair(&Origin::Unknown, &Origin::Unknown).is_unknown());
    }
}
