//! Serialize the live tree back to SVG markup.
//!
//! The export collaborator rasterizes from markup, so this walk emits the
//! current (fully mutated) attribute values, not the originals. White
//! strokes can be rewritten to black on the way out; printed outlines
//! must stay visible on white paper.

use pinta_dom::{NodeData, NodeId, SvgDocument};

/// Serialization options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializeOptions {
    /// Rewrite strokes that normalize to white as `#000000`.
    pub force_black_strokes: bool,
}

/// Serialize a document to SVG text, starting at the `<svg>` root.
pub fn write_markup(doc: &SvgDocument, options: SerializeOptions) -> String {
    let mut out = String::new();
    write_node(doc, doc.svg_root(), options, &mut out);
    out
}

fn write_node(doc: &SvgDocument, id: NodeId, options: SerializeOptions, out: &mut String) {
    let Some(node) = doc.tree.get(id) else {
        return;
    };
    match &node.data {
        NodeData::Root => {}
        NodeData::Text(content) => out.push_str(&escape_text(content)),
        NodeData::Element(elem) => {
            out.push('<');
            out.push_str(&elem.name);
            for attr in &elem.attrs {
                let value = if options.force_black_strokes
                    && attr.name == "stroke"
                    && pinta_color::is_white(Some(&attr.value))
                {
                    "#000000"
                } else {
                    attr.value.as_str()
                };
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                out.push_str(&escape_attr(value));
                out.push('"');
            }
            if node.first_child.is_valid() {
                out.push('>');
                for child in doc.tree.children(id) {
                    write_node(doc, child, options, out);
                }
                out.push_str("</");
                out.push_str(&elem.name);
                out.push('>');
            } else {
                out.push_str("/>");
            }
        }
    }
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SvgParser;

    #[test]
    fn test_roundtrip_markup() {
        let doc = SvgParser::new()
            .parse(r##"<svg viewBox="0 0 4 4"><path d="M0 0" fill="#ffffff"/></svg>"##)
            .unwrap();
        let markup = write_markup(&doc, SerializeOptions::default());
        assert!(markup.starts_with(r#"<svg viewBox="0 0 4 4">"#));
        assert!(markup.contains(r##"<path d="M0 0" fill="#ffffff"/>"##));
        assert!(markup.ends_with("</svg>"));
    }

    #[test]
    fn test_force_black_strokes() {
        let doc = SvgParser::new()
            .parse(r##"<svg><path stroke="white" fill="#fff"/><path stroke="#123456"/></svg>"##)
            .unwrap();
        let markup = write_markup(
            &doc,
            SerializeOptions {
                force_black_strokes: true,
            },
        );
        assert!(markup.contains(r##"stroke="#000000""##));
        assert!(markup.contains(r##"stroke="#123456""##));
        // fills are untouched
        assert!(markup.contains(r##"fill="#fff""##));
    }

    #[test]
    fn test_escaping() {
        let doc = SvgParser::new()
            .parse(r#"<svg><text>a &amp; b</text></svg>"#)
            .unwrap();
        let markup = write_markup(&doc, SerializeOptions::default());
        assert!(markup.contains("a &amp; b"));
    }
}
