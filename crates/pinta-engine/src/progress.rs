//! Unique-paint progress tracking and the completion award.
//!
//! Each region counts at most once per page toward the persisted unique
//! count, no matter how many times it is recolored. Undo never decrements
//! the count and never revokes an award; that mirrors the shipped product
//! behavior and is pinned by tests.

use std::collections::HashSet;

use pinta_dom::NodeId;

use crate::feedback::FeedbackSink;
use crate::store::ProgressStore;

/// Per-page unique-paint tracker.
#[derive(Debug)]
pub struct ProgressTracker {
    threshold: u32,
    /// Region ids already counted for the current page. In-memory only;
    /// the persisted count survives sessions but this set does not.
    painted: HashSet<NodeId>,
}

impl ProgressTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            painted: HashSet::new(),
        }
    }

    /// Forget the membership set; called when a new page mounts.
    pub fn reset_page(&mut self) {
        self.painted.clear();
    }

    /// Record a successful paint of `node` on `page`.
    ///
    /// One rule decides whether the paint counts: the region must have
    /// become non-blank (not white/none/empty) and must not have been
    /// counted before on this page. The legacy clicks map is mirrored
    /// from the same site so the two persisted counters cannot diverge.
    pub fn on_paint(
        &mut self,
        store: &mut dyn ProgressStore,
        feedback: &mut dyn FeedbackSink,
        page: &str,
        node: NodeId,
        prev: Option<&str>,
        next: &str,
    ) {
        if store.star(page) {
            return;
        }
        if pinta_color::is_blank(Some(next)) {
            return;
        }
        if !self.painted.insert(node) {
            return;
        }
        // Re-read before incrementing; another session may have written.
        let count = store.unique_count(page).saturating_add(1);
        store.set_unique_count(page, count);
        store.set_clicks(page, count);
        tracing::debug!(page, count, prev = prev.unwrap_or(""), "unique paint");

        if count >= self.threshold {
            store.set_star(page);
            tracing::info!(page, "completion award");
            feedback.star_awarded(page);
        }
    }
}
