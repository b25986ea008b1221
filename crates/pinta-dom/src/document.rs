//! Document - one mounted page.

use crate::{NodeId, SvgTree};

/// A parsed SVG page document.
///
/// Owns the arena tree plus a cached handle to the `<svg>` element, which
/// every engine pass starts from.
#[derive(Debug)]
pub struct SvgDocument {
    /// The element tree.
    pub tree: SvgTree,
    svg: NodeId,
}

impl SvgDocument {
    /// Wrap a tree whose `<svg>` element is already known.
    pub fn new(tree: SvgTree, svg: NodeId) -> Self {
        Self { tree, svg }
    }

    /// The `<svg>` root element.
    pub fn svg_root(&self) -> NodeId {
        self.svg
    }

    /// Read an attribute off the `<svg>` root.
    pub fn root_attr(&self, name: &str) -> Option<&str> {
        self.tree.attr(self.svg, name)
    }

    /// Write an attribute on the `<svg>` root.
    pub fn set_root_attr(&mut self, name: &str, value: impl Into<String>) {
        self.tree.set_attr(self.svg, name, value);
    }

    /// All elements under the root in document order.
    pub fn elements(&self) -> Vec<NodeId> {
        self.tree
            .descendants(self.svg)
            .into_iter()
            .filter(|&id| self.tree.get(id).is_some_and(|n| n.is_element()))
            .collect()
    }
}
