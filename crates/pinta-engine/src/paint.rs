//! Paint state engine - fill mutation with undo/redo.
//!
//! Two bounded action stacks, LIFO. A fresh paint clears redo history;
//! undo and redo trade records between the stacks and never clear the
//! counterpart. Records hold arena ids, valid only for the current page,
//! so both stacks are dropped on page mount.

use std::collections::VecDeque;

use pinta_dom::{NodeId, SvgDocument};

/// The only attribute the product ever paints, though records stay
/// attribute-generic.
const FILL: &str = "fill";

/// One undoable mutation: which node, which attribute, what it held before.
#[derive(Debug, Clone)]
pub struct ActionRecord {
    pub node: NodeId,
    pub attr: String,
    /// Value before the mutation; `None` means the attribute was absent.
    pub prev: Option<String>,
}

/// Applies and reverts fill mutations on the mounted document.
#[derive(Debug)]
pub struct PaintEngine {
    undo: VecDeque<ActionRecord>,
    redo: Vec<ActionRecord>,
    max_depth: usize,
}

impl PaintEngine {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            max_depth,
        }
    }

    /// Paint a region. Returns false (a no-op, not an error) when the
    /// region is not paintable or already holds `next`.
    pub fn paint(
        &mut self,
        doc: &mut SvgDocument,
        node: NodeId,
        paintable: bool,
        next: &str,
    ) -> bool {
        if !paintable {
            return false;
        }
        let prev = doc.tree.attr(node, FILL).map(str::to_string);
        if prev.as_deref() == Some(next) {
            return false;
        }
        self.push_undo(ActionRecord {
            node,
            attr: FILL.to_string(),
            prev,
        });
        self.redo.clear();
        doc.tree.set_attr(node, FILL, next);
        true
    }

    /// Revert the most recent action. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self, doc: &mut SvgDocument) -> bool {
        let Some(record) = self.undo.pop_back() else {
            return false;
        };
        let current = doc.tree.attr(record.node, &record.attr).map(str::to_string);
        self.redo.push(ActionRecord {
            node: record.node,
            attr: record.attr.clone(),
            prev: current,
        });
        apply(doc, record);
        true
    }

    /// Re-apply the most recently undone action. Symmetric mirror of
    /// [`PaintEngine::undo`]; never clears the redo stack itself.
    pub fn redo(&mut self, doc: &mut SvgDocument) -> bool {
        let Some(record) = self.redo.pop() else {
            return false;
        };
        let current = doc.tree.attr(record.node, &record.attr).map(str::to_string);
        self.push_undo(ActionRecord {
            node: record.node,
            attr: record.attr.clone(),
            prev: current,
        });
        apply(doc, record);
        true
    }

    /// Drop both stacks; called on page mount.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    fn push_undo(&mut self, record: ActionRecord) {
        self.undo.push_back(record);
        while self.undo.len() > self.max_depth {
            self.undo.pop_front();
        }
    }
}

/// Restore a record: put the stored value back, or drop the attribute if
/// it was absent.
fn apply(doc: &mut SvgDocument, record: ActionRecord) {
    match record.prev {
        Some(value) => doc.tree.set_attr(record.node, &record.attr, value),
        None => {
            doc.tree.remove_attr(record.node, &record.attr);
        }
    }
}
