//! pinta DOM - SVG element tree
//!
//! Arena-backed tree for one page's vector illustration. Node handles are
//! plain indices, so engine-side bookkeeping (original attribute
//! snapshots, paint membership sets) can key off a stable integer id
//! instead of holding references into the tree.

mod document;
mod node;
mod tree;

pub use document::SvgDocument;
pub use node::{Attribute, ElementData, ElementKind, Node, NodeData};
pub use tree::SvgTree;

/// Node identifier (index into the arena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Sentinel for "no node" (absent parent, sibling, or child link).
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// True unless this is the [`NodeId::NONE`] sentinel.
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena slot index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
