//! Reports over aligned trees.
//!
//! A renderer walks the aligned tree of an [`Alignment`] and writes a human
//! readable report. Subtrees holding only warnings are told apart from
//! subtrees holding hard mismatches.

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use std::io::{self, Write};

use crate::align::Alignment;
use crate::content::Content;

/// Turns an alignment into a report.
pub trait Renderer {
    /// Writes the report to `writer`.
    fn render_to(&self, alignment: &Alignment, writer: &mut dyn Write) -> io::Result<()>;

    /// Renders the report to a string.
    fn render(&self, alignment: &Alignment) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.render_to(alignment, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Renders a plain-text report.
pub fn render_text(alignment: &Alignment) -> io::Result<String> {
    TextRenderer.render(alignment)
}

/// Renders a standalone HTML report.
pub fn render_html(alignment: &Alignment) -> io::Result<String> {
    HtmlRenderer.render(alignment)
}

/// Entries of a record in report order: sorted for a Mapping, stored order
/// for an OrderedMapping. Returns `None` for other variants.
fn record_entries(content: &Content) -> Option<Vec<(&str, &Content)>> {
    match content {
        Content::Mapping(map) => {
            let mut entries: Vec<(&str, &Content)> =
                map.entries.iter().map(|(k, v)| (k.as_str(), v)).collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Some(entries)
        }
        Content::OrderedMapping(map) => {
            Some(map.entries.iter().map(|(k, v)| (k.as_str(), v)).collect())
        }
        _ => None,
    }
}
