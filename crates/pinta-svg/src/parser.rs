//! SVG parser implementation.
//!
//! Uses roxmltree for the XML pass and converts node-by-node into our
//! arena tree. Comments and processing instructions are dropped; the
//! engine only ever looks at elements and their text content.

use pinta_dom::{NodeId, SvgDocument, SvgTree};

use crate::ParseError;

/// SVG parser.
pub struct SvgParser;

impl SvgParser {
    /// Create a new SVG parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse SVG text into a document.
    ///
    /// The `<svg>` element does not have to be the XML root; like the
    /// browser mount, the first `<svg>` found wins. Anything outside it
    /// is ignored.
    pub fn parse(&self, text: &str) -> Result<SvgDocument, ParseError> {
        let xml = roxmltree::Document::parse(text.trim())
            .map_err(|e| ParseError::Markup(e.to_string()))?;

        let svg_node = xml
            .root_element()
            .descendants()
            .filter(|n| n.is_element())
            .find(|n| n.tag_name().name().eq_ignore_ascii_case("svg"))
            .ok_or(ParseError::MissingSvgRoot)?;

        let mut tree = SvgTree::new();
        let root = tree.root();
        let svg = convert_element(&mut tree, root, svg_node);
        tracing::debug!("parsed SVG page: {} nodes", tree.len());
        Ok(SvgDocument::new(tree, svg))
    }
}

impl Default for SvgParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert one roxmltree element (and its subtree) into the arena.
fn convert_element(tree: &mut SvgTree, parent: NodeId, source: roxmltree::Node<'_, '_>) -> NodeId {
    let tag = source.tag_name().name().to_ascii_lowercase();
    let id = tree.create_element(tag);

    if let Some(elem) = tree.element_mut(id) {
        for attr in source.attributes() {
            elem.set_attr(attr.name(), attr.value());
        }
    }
    tree.append_child(parent, id);

    for child in source.children() {
        if child.is_element() {
            convert_element(tree, id, child);
        } else if let Some(text) = child.text() {
            if !text.trim().is_empty() {
                let text_id = tree.create_text(text);
                tree.append_child(id, text_id);
            }
        }
    }
    id
}
