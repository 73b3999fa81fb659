//! Plain-text reporter.

use std::io::{self, Write};

use super::{record_entries, Renderer};
use crate::align::Alignment;
use crate::content::{Content, Mismatch};
use crate::count::count_errors;

/// Writes an indented plain-text report.
///
/// Containers without issues collapse to a single `OK` line, so the report
/// mostly shows where the two documents disagree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_to(&self, alignment: &Alignment, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(
            writer,
            "{} vs {}: {}",
            alignment.left_name, alignment.right_name, alignment.counts
        )?;
        write_node(writer, "", &alignment.tree, 0, false)
    }
}

fn severity_tag(is_error: bool) -> &'static str {
    if is_error {
        "!ERROR!"
    } else {
        "!WARNING!"
    }
}

fn write_node(
    w: &mut dyn Write,
    label: &str,
    content: &Content,
    depth: usize,
    in_error: bool,
) -> io::Result<()> {
    let pad = "  ".repeat(depth);
    match content {
        Content::Leaf(leaf) => writeln!(w, "{}{}{:?}", pad, label, leaf.value),
        Content::Wildcard(_) => writeln!(w, "{}{}*", pad, label),
        Content::Mismatch(m) => write_mismatch(w, label, m, depth),
        Content::Annotation(a) => {
            writeln!(w, "{}{}{} {}", pad, label, severity_tag(a.kind().is_error()), a.kind())?;
            write_node(w, "", a.value(), depth + 1, in_error)
        }
        Content::Sequence(_) | Content::Multiset(_) | Content::Mapping(_) | Content::OrderedMapping(_) => {
            let counts = count_errors(content);
            if in_error {
                writeln!(w, "{}{}{}", pad, label, content.kind_name())?;
            } else if counts.is_clean() {
                return writeln!(w, "{}{}OK", pad, label);
            } else {
                writeln!(w, "{}{}{} {}", pad, label, content.kind_name(), counts)?;
            }
            write_children(w, content, depth + 1, in_error)
        }
    }
}

fn write_children(w: &mut dyn Write, content: &Content, depth: usize, in_error: bool) -> io::Result<()> {
    match content {
        Content::Sequence(seq) => {
            for (i, item) in seq.items.iter().enumerate() {
                write_node(w, &format!("{}. ", i + 1), item, depth, in_error)?;
            }
        }
        Content::Multiset(set) => {
            for item in &set.items {
                write_node(w, "- ", item, depth, in_error)?;
            }
        }
        _ => {
            for (key, value) in record_entries(content).unwrap_or_default() {
                write_node(w, &format!("{}: ", key), value, depth, in_error)?;
            }
        }
    }
    Ok(())
}

fn write_mismatch(w: &mut dyn Write, label: &str, m: &Mismatch, depth: usize) -> io::Result<()> {
    let pad = "  ".repeat(depth);
    let tag = if m.kind().is_error() {
        "!MISMATCH!"
    } else {
        "!WARNING!"
    };
    writeln!(w, "{}{}{} {}", pad, label, tag, m.kind())?;
    for (name, side) in [("left: ", m.left()), ("right: ", m.right())] {
        match side {
            Some(content) => write_node(w, name, content, depth + 1, true)?,
            None => writeln!(w, "{}  {}NONE", pad, name)?,
        }
    }
    Ok(())
}
