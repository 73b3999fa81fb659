//! Producers turning source documents into content trees.
//!
//! A producer must yield a raw tree rooted at a Mapping or OrderedMapping,
//! with a position on every node. Only the JSON front end ships with this
//! crate; other front ends implement [`Producer`] themselves.

pub mod json;

pub use json::{parse_file, parse_str, parse_value, JsonProducer};

use crate::content::Content;
use crate::error::Result;

/// A named content tree extracted from one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display name of the source, used in reports.
    pub name: String,
    pub root: Content,
}

impl Document {
    pub fn new(name: impl Into<String>, root: Content) -> Self {
        Document {
            name: name.into(),
            root,
        }
    }
}

/// A front end that extracts a document tree from its source.
pub trait Producer {
    /// Builds the document tree.
    fn produce(&self) -> Result<Document>;
}
