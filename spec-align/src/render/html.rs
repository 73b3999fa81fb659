//! HTML reporter.
//!
//! Produces one self-contained page. Every container gets a toggle header
//! with a `(Fine)` badge or its error and warning counts; mismatches and
//! annotations carry the `alignment-error` or `alignment-warning` class.
//! Badges are left out inside the sides of a mismatch, whose raw content is
//! shown as is.

use std::io::{self, Write};

use quick_xml::escape::escape;

use super::{record_entries, Renderer};
use crate::align::Alignment;
use crate::content::{Content, Mismatch};
use crate::count::{count_errors, ErrorWarningCount};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body { font-family: sans-serif; }
ul, ol { list-style-position: inside; }
.toggle { cursor: pointer; font-weight: bold; }
.content { margin-left: 1.5em; }
.no-error { color: green; }
.error-count { color: darkorange; }
.alignment-error { color: white; background: firebrick; padding: 0 0.3em; }
.alignment-warning { background: gold; padding: 0 0.3em; }
.text-displayer { border-left: 2px solid gray; padding-left: 0.5em; }
.wildcard { font-style: italic; }
</style>
</head>
<body>
"#;

const PAGE_TAIL: &str = r#"
<script>
document.querySelectorAll('.toggle').forEach(function (el) {
  el.addEventListener('click', function () {
    var next = el.nextElementSibling;
    next.style.display = next.style.display === 'none' ? '' : 'none';
  });
});
</script>
</body>
</html>
"#;

/// Writes a standalone HTML report.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render_to(&self, alignment: &Alignment, writer: &mut dyn Write) -> io::Result<()> {
        let title = format!("{} vs {}", alignment.left_name, alignment.right_name);
        writer.write_all(PAGE_HEAD.replace("{title}", &escape(title.as_str())).as_bytes())?;
        writeln!(
            writer,
            "<h1>{}</h1>\n<p>{}</p>",
            escape(title.as_str()),
            escape(alignment.counts.to_string().as_str())
        )?;
        write_node(writer, &alignment.tree, false)?;
        writer.write_all(PAGE_TAIL.as_bytes())
    }
}

fn write_node(w: &mut dyn Write, content: &Content, in_error: bool) -> io::Result<()> {
    match content {
        Content::Leaf(leaf) => {
            write!(w, "<div>\"{}\"", escape(leaf.value.as_str()))?;
            write_positions(w, content)?;
            write!(w, "</div>")
        }
        Content::Wildcard(_) => {
            write!(w, "<div class=\"wildcard\">Wildcard")?;
            write_positions(w, content)?;
            write!(w, "</div>")
        }
        Content::Sequence(seq) => {
            write_header(w, content, in_error)?;
            write!(w, "<div class=\"content\"><ol>")?;
            for item in &seq.items {
                write!(w, "<li>")?;
                write_node(w, item, in_error)?;
                write!(w, "</li>")?;
            }
            write!(w, "</ol></div>")
        }
        Content::Multiset(set) => {
            write_header(w, content, in_error)?;
            write!(w, "<div class=\"content\"><ul>")?;
            for item in &set.items {
                write!(w, "<li>")?;
                write_node(w, item, in_error)?;
                write!(w, "</li>")?;
            }
            write!(w, "</ul></div>")
        }
        Content::Mapping(_) | Content::OrderedMapping(_) => {
            let key_tag = if matches!(content, Content::Mapping(_)) {
                "h3"
            } else {
                "strong"
            };
            write_header(w, content, in_error)?;
            write!(w, "<div class=\"content\"><ul>")?;
            for (key, value) in record_entries(content).unwrap_or_default() {
                write!(w, "<li><{0}>{1}:</{0}> ", key_tag, escape(key))?;
                write_node(w, value, in_error)?;
                write!(w, "</li>")?;
            }
            write!(w, "</ul></div>")
        }
        Content::Annotation(a) => {
            write!(w, "<div>")?;
            write_flag(w, a.kind().is_error(), &a.kind().to_string())?;
            write!(w, "<div>")?;
            write_node(w, a.value(), in_error)?;
            write!(w, "</div></div>")
        }
        Content::Mismatch(m) => write_mismatch(w, m),
    }
}

fn write_mismatch(w: &mut dyn Write, m: &Mismatch) -> io::Result<()> {
    write!(w, "<div>")?;
    write_flag(w, m.kind().is_error(), &m.kind().to_string())?;
    write_side(w, m.left())?;
    write!(w, "<div> VS </div>")?;
    write_side(w, m.right())?;
    write!(w, "</div>")
}

fn write_side(w: &mut dyn Write, side: Option<&Content>) -> io::Result<()> {
    write!(w, "<div class=\"text-displayer\">")?;
    match side {
        Some(content) => write_node(w, content, true)?,
        None => write!(w, "None")?,
    }
    write!(w, "</div>")
}

fn write_flag(w: &mut dyn Write, is_error: bool, label: &str) -> io::Result<()> {
    let (class, severity) = if is_error {
        ("alignment-error", "ERROR")
    } else {
        ("alignment-warning", "WARNING")
    };
    write!(w, "<div class=\"{}\">{}: {}</div>", class, severity, escape(label))
}

fn write_header(w: &mut dyn Write, content: &Content, in_error: bool) -> io::Result<()> {
    write!(w, "<div class=\"toggle\">{} ", content.kind_name())?;
    if !in_error {
        write_badge(w, count_errors(content))?;
    }
    write_positions(w, content)?;
    write!(w, "</div>")
}

fn write_badge(w: &mut dyn Write, counts: ErrorWarningCount) -> io::Result<()> {
    if counts.is_clean() {
        write!(w, "<span class=\"no-error\">(Fine)</span>")
    } else {
        write!(w, "<span class=\"error-count\">{}</span>", counts)
    }
}

fn write_positions(w: &mut dyn Write, content: &Content) -> io::Result<()> {
    let references = content.origin().references();
    if references.is_empty() {
        return Ok(());
    }
    write!(w, ", <div> POS: {}</div>", escape(references.join(", ").as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Aligner;
    use crate::content::Marker;
    use crate::ingest::Document;

    fn report(left: Content, right: Content) -> String {
        let alignment = Aligner::new()
            .align_documents(&Document::new("left", left), &Document::new("right", right))
            .unwrap();
        HtmlRenderer.render(&alignment).unwrap()
    }

    #[test]
    fn test_clean_document() {
        let doc = Content::mapping([("a", Content::leaf("x"))]);
        let output = report(doc.clone(), doc);
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("<title>left vs right</title>"));
        assert!(output.contains("Mapping <span class=\"no-error\">(Fine)</span>"));
        assert!(output.contains("<li><h3>a:</h3> <div>\"x\"</div></li>"));
        assert!(!output.contains("class=\"alignment-error\""));
        assert!(!output.contains("class=\"alignment-warning\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let left = Content::mapping([("<k>", Content::leaf("a & b"))]);
        let right = Content::mapping([("<k>", Content::leaf("a & c"))]);
        let output = report(left, right);
        assert!(output.contains("&lt;k&gt;:"));
        assert!(output.contains("\"a &amp; b\""));
        assert!(!output.contains("<k>"));
    }

    #[test]
    fn test_error_and_warning_classes() {
        let left = Content::mapping([("a", Content::leaf("x")), ("w", Content::wildcard())]);
        let right = Content::mapping([("a", Content::leaf("y")), ("w", Content::leaf("z"))]);
        let output = report(left, right);
        assert!(output.contains("<div class=\"alignment-error\">ERROR: Not same text</div>"));
        assert!(output.contains("<div class=\"alignment-warning\">WARNING: Wildcard matched</div>"));
        assert!(output.contains("<span class=\"error-count\">(1 errors, 1 warnings)</span>"));
    }

    #[test]
    fn test_no_badges_inside_mismatch() {
        let left = Content::mapping([("a", Content::sequence(vec![Content::leaf("x")]))]);
        let right = Content::mapping([("a", Content::leaf("x"))]);
        let output = report(left, right);
        assert!(output.contains("<div class=\"toggle\">Sequence </div>"));
        assert!(output.contains("<div class=\"text-displayer\"><div>\"x\"</div></div>"));
    }

    #[test]
    fn test_positions_listed() {
        let left = Content::mapping([(
            "a",
            Content::leaf("x").with_position(Marker("left.json".to_string())),
        )]);
        let right = Content::mapping([(
            "a",
            Content::leaf("x").with_position(Marker("right.json".to_string())),
        )]);
        let output = report(left, right);
        assert!(output.contains("<div>\"x\", <div> POS: left.json, right.json</div></div>"));
    }
}
