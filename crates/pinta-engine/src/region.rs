//! Region arena - per-node original attributes and paintability.
//!
//! Indexed by the same integer ids as the document arena, so membership
//! tracking never holds references into the tree.

use pinta_color::Color;
use pinta_dom::{ElementKind, NodeId};

/// What the normalizer captured for one element.
///
/// `orig_fill`/`orig_stroke` are the values as first observed (after the
/// corrective stroke rule) and never change afterwards; `paintable` is
/// derived from them exactly once.
#[derive(Debug, Clone)]
pub struct RegionInfo {
    pub orig_fill: Color,
    pub orig_stroke: Color,
    pub kind: ElementKind,
    pub paintable: bool,
}

/// Region table for the currently mounted page.
#[derive(Debug, Default)]
pub struct Regions {
    infos: Vec<Option<RegionInfo>>,
}

impl Regions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything; called when a new page mounts.
    pub fn clear(&mut self) {
        self.infos.clear();
    }

    /// True once a snapshot exists for this node.
    pub fn is_captured(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Record a snapshot. First touch wins; a second insert for the same
    /// node is ignored so repeated normalization passes cannot overwrite
    /// an original.
    pub fn insert(&mut self, id: NodeId, info: RegionInfo) {
        let index = id.index();
        if index >= self.infos.len() {
            self.infos.resize(index + 1, None);
        }
        let slot = &mut self.infos[index];
        if slot.is_none() {
            *slot = Some(info);
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&RegionInfo> {
        self.infos.get(id.index())?.as_ref()
    }

    /// Paintability of a node, false when never captured.
    pub fn is_paintable(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|info| info.paintable)
    }

    /// Number of paintable regions on the page.
    pub fn paintable_count(&self) -> usize {
        self.infos
            .iter()
            .flatten()
            .filter(|info| info.paintable)
            .count()
    }

    /// Number of captured regions.
    pub fn len(&self) -> usize {
        self.infos.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinta_color::{BLACK, WHITE};

    fn info(paintable: bool) -> RegionInfo {
        RegionInfo {
            orig_fill: WHITE,
            orig_stroke: BLACK,
            kind: ElementKind::Path,
            paintable,
        }
    }

    #[test]
    fn test_first_touch_wins() {
        let mut regions = Regions::new();
        let mut tree = pinta_dom::SvgTree::new();
        let node = tree.create_element("path");
        regions.insert(node, info(true));
        regions.insert(node, info(false));
        assert!(regions.is_paintable(node));
    }

    #[test]
    fn test_uncaptured_is_not_paintable() {
        let regions = Regions::new();
        let mut tree = pinta_dom::SvgTree::new();
        let node = tree.create_element("path");
        assert!(!regions.is_paintable(node));
        assert!(regions.is_empty());
    }
}
