//! spec-align - structural alignment of document trees
//!
//! This library compares two documents that describe the same thing from
//! different sources, e.g. a prose specification and a formal model of it.
//! Each source is first turned into a generic [`Content`] tree by a front
//! end; the aligner then walks both trees together and builds one merged
//! tree in which every disagreement is recorded in place.
//!
//! # Overview
//!
//! - Leaves compare as text, ignoring plain and non-breaking spaces
//! - Sequences, multisets, mappings and ordered mappings each have their own
//!   alignment rules
//! - Misspelled mapping keys are recovered by fuzzy matching
//! - Wildcards absorb anything and only raise a warning
//!
//! The merged tree can be counted with [`count_errors`] and turned into a
//! text or HTML report with a [`Renderer`].
//!
//! # Example
//!
//! ```
//! use spec_align::{align, count_errors, Content, ErrorWarningCount};
//!
//! let left = Content::mapping([("a", Content::leaf("x")), ("b", Content::leaf("y"))]);
//! let right = Content::mapping([("a", Content::leaf("x")), ("c", Content::leaf("y"))]);
//!
//! let tree = align(&left, &right);
//! assert_eq!(count_errors(&tree), ErrorWarningCount::new(2, 0));
//! ```

pub mod align;
pub mod config;
pub mod constants;
pub mod content;
pub mod count;
pub mod error;
pub mod ingest;
pub mod render;
pub mod taxonomy;

// Re-export commonly used types
pub use align::{align, edit_distance, find_closest_key, Aligner, Alignment};
pub use config::AlignConfig;
pub use constants::*;
pub use content::{
    Annotation, Content, Fingerprint, Leaf, LineRange, Mapping, Marker, Mismatch, Multiset,
    OrderedMapping, Origin, PosRef, Position, Sequence, Side, UrlPosition, Wildcard,
};
pub use count::{count_errors, ErrorWarningCount};
pub use error::{Error, Result};
pub use ingest::{Document, JsonProducer, Producer};
pub use render::{render_html, render_text, HtmlRenderer, Renderer, TextRenderer};
pub use taxonomy::ErrorKind;
