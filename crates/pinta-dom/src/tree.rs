//! SVG tree (arena-based allocation).

use crate::{ElementData, Node, NodeData, NodeId};

/// Arena-based tree for one page's SVG document.
///
/// Slot 0 is always the synthetic root; the `<svg>` element is its child.
#[derive(Debug)]
pub struct SvgTree {
    nodes: Vec<Node>,
}

impl SvgTree {
    /// Create a tree containing only the synthetic root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Root)],
        }
    }

    /// Root node id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Get a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree (root included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree holds nothing but the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Allocate a detached element node.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(Node::new(NodeData::Element(ElementData::new(tag))))
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.push(Node::new(NodeData::Text(content.into())))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev_last;
            node.next_sibling = NodeId::NONE;
        }
        if prev_last.is_valid() {
            self.nodes[prev_last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Insert `child` as the first child of `parent`.
    pub fn insert_first_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_first = self.nodes[parent.index()].first_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = NodeId::NONE;
            node.next_sibling = prev_first;
        }
        if prev_first.is_valid() {
            self.nodes[prev_first.index()].prev_sibling = child;
        } else {
            self.nodes[parent.index()].last_child = child;
        }
        self.nodes[parent.index()].first_child = child;
    }

    /// Iterate the immediate children of a node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.get(id).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next: first }
    }

    /// All nodes under `id` in document order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).collect();
        stack.reverse();
        while let Some(node) = stack.pop() {
            out.push(node);
            let mut children: Vec<NodeId> = self.children(node).collect();
            children.reverse();
            stack.append(&mut children);
        }
        out
    }

    /// Walk from `id` through its ancestors (inclusive), returning the
    /// first element accepted by the predicate. This is the arena version
    /// of the DOM `closest()` lookup used for click routing.
    pub fn closest<F>(&self, id: NodeId, mut accept: F) -> Option<NodeId>
    where
        F: FnMut(NodeId, &ElementData) -> bool,
    {
        let mut cursor = id;
        while cursor.is_valid() {
            let node = self.get(cursor)?;
            if let Some(elem) = node.as_element() {
                if accept(cursor, elem) {
                    return Some(cursor);
                }
            }
            cursor = node.parent;
        }
        None
    }

    /// Element data accessor.
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id)?.as_element()
    }

    /// Mutable element data accessor.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id)?.as_element_mut()
    }

    /// Read an attribute off an element node.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(name)
    }

    /// Write an attribute on an element node. Ignores non-element ids;
    /// the tree never treats that as an error.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        match self.element_mut(id) {
            Some(elem) => elem.set_attr(name, value),
            None => tracing::debug!(id = id.index(), name, "attribute write on non-element node ignored"),
        }
    }

    /// Remove an attribute from an element node.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id)?.remove_attr(name)
    }
}

impl Default for SvgTree {
    fn default() -> Self {
        Self::new()
    }
}

struct Children<'a> {
    tree: &'a SvgTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.get(current).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(current)
    }
}
