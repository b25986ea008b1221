//! Session - the explicit context object.
//!
//! Owns everything the original app kept as ambient globals: the page
//! list, the mounted document and its region table, the paint engine,
//! the progress tracker, palette state, and the collaborator seams
//! (source, store, feedback). One session is one user sitting at one
//! coloring book.

use pinta_dom::{NodeId, SvgDocument};
use pinta_svg::{SerializeOptions, write_markup};

use crate::feedback::FeedbackSink;
use crate::normalize::prepare_document;
use crate::paint::PaintEngine;
use crate::progress::ProgressTracker;
use crate::region::Regions;
use crate::source::PageSource;
use crate::store::ProgressStore;
use crate::LoadError;

/// Session tuning knobs.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Unique paints required for the completion award.
    pub award_threshold: u32,
    /// Maximum undo stack depth.
    pub undo_depth: usize,
    /// Swatch selected when the session starts.
    pub default_color: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            award_threshold: 14,
            undo_depth: 100,
            default_color: "#e0c2a2".to_string(),
        }
    }
}

/// Token for an in-flight page load.
///
/// Carries the load generation; completing a ticket whose generation has
/// been superseded by a newer `begin_load` is rejected, so a stale fetch
/// can never overwrite a newer page.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    index: usize,
    generation: u64,
}

impl LoadTicket {
    /// Page index this ticket will mount.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Result of completing a page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page is now mounted.
    Mounted,
    /// A newer load superseded this one; nothing changed.
    Superseded,
}

/// Book-level progress numbers for the header UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub stars: usize,
    pub total_pages: usize,
    /// Rounded-up percentage of starred pages.
    pub percent: u32,
}

/// One interactive coloring session.
pub struct Session {
    pages: Vec<String>,
    index: usize,
    doc: Option<SvgDocument>,
    regions: Regions,
    engine: PaintEngine,
    tracker: ProgressTracker,
    source: Box<dyn PageSource>,
    store: Box<dyn ProgressStore>,
    feedback: Box<dyn FeedbackSink>,
    color: String,
    erasing: bool,
    generation: u64,
}

impl Session {
    pub fn new(
        source: Box<dyn PageSource>,
        store: Box<dyn ProgressStore>,
        feedback: Box<dyn FeedbackSink>,
        config: SessionConfig,
    ) -> Self {
        Self {
            pages: Vec::new(),
            index: 0,
            doc: None,
            regions: Regions::new(),
            engine: PaintEngine::new(config.undo_depth),
            tracker: ProgressTracker::new(config.award_threshold),
            source,
            store,
            feedback,
            color: config.default_color,
            erasing: false,
            generation: 0,
        }
    }

    /// Install the ordered page list produced by discovery.
    ///
    /// Bumps the load generation: a ticket issued against the old list
    /// could carry an index past the end of the new one, so any load
    /// still in flight completes as superseded.
    pub fn set_pages(&mut self, pages: Vec<String>) {
        tracing::info!(count = pages.len(), "pages installed");
        self.pages = pages;
        self.generation += 1;
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Stable identifier of the mounted page, if any.
    pub fn current_page_id(&self) -> Option<&str> {
        self.doc.as_ref()?;
        self.pages.get(self.index).map(String::as_str)
    }

    /// Header label, `current / total`.
    pub fn page_label(&self) -> String {
        let total = self.pages.len();
        let current = (self.index + 1).min(total);
        format!("{current} / {total}")
    }

    // === Page loading ===

    /// Start a load. Clamps the index into range and bumps the load
    /// generation, superseding any load still in flight.
    pub fn begin_load(&mut self, index: usize) -> Result<LoadTicket, LoadError> {
        if self.pages.is_empty() {
            return Err(LoadError::NoPages);
        }
        let index = index.min(self.pages.len() - 1);
        self.generation += 1;
        Ok(LoadTicket {
            index,
            generation: self.generation,
        })
    }

    /// Finish a load with fetched markup. Parse failures leave the
    /// previously mounted page untouched.
    pub fn complete_load(&mut self, ticket: LoadTicket, text: &str) -> Result<LoadOutcome, LoadError> {
        if ticket.generation != self.generation {
            tracing::debug!(index = ticket.index, "stale load dropped");
            return Ok(LoadOutcome::Superseded);
        }
        let mut doc = pinta_svg::parse(text)?;
        self.regions.clear();
        prepare_document(&mut doc, &mut self.regions);

        self.index = ticket.index;
        self.doc = Some(doc);
        self.engine.clear();
        self.tracker.reset_page();
        self.feedback.tick();
        tracing::info!(page = %self.pages[self.index], "page mounted");
        Ok(LoadOutcome::Mounted)
    }

    /// Synchronous fetch-and-mount through the page source.
    pub fn load_page(&mut self, index: usize) -> Result<LoadOutcome, LoadError> {
        let ticket = self.begin_load(index)?;
        let id = self.pages[ticket.index].clone();
        let text = self.source.read(&id)?;
        self.complete_load(ticket, &text)
    }

    /// Load the next page; `None` when already on the last one.
    pub fn next_page(&mut self) -> Option<Result<LoadOutcome, LoadError>> {
        if self.index + 1 < self.pages.len() {
            Some(self.load_page(self.index + 1))
        } else {
            None
        }
    }

    /// Load the previous page; `None` when already on the first one.
    pub fn prev_page(&mut self) -> Option<Result<LoadOutcome, LoadError>> {
        if self.index > 0 && !self.pages.is_empty() {
            Some(self.load_page(self.index - 1))
        } else {
            None
        }
    }

    // === Palette ===

    /// Select the active color and leave eraser mode.
    pub fn set_color(&mut self, color: &str) {
        self.color = color.trim().to_string();
        self.erasing = false;
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Toggle eraser mode (paints white); returns the new state.
    pub fn toggle_eraser(&mut self) -> bool {
        self.erasing = !self.erasing;
        self.erasing
    }

    pub fn erasing(&self) -> bool {
        self.erasing
    }

    // === Painting ===

    /// Handle a tap/click that landed on `node`.
    ///
    /// Walks the ancestry for the nearest paintable region (the arena
    /// version of delegated event matching), then paints it with the
    /// active color or white in eraser mode. Returns false for the
    /// silent no-op cases: nothing mounted, no paintable ancestor, same
    /// color.
    pub fn click(&mut self, node: NodeId) -> bool {
        let Some(doc) = self.doc.as_mut() else {
            return false;
        };
        let regions = &self.regions;
        let Some(target) = doc.tree.closest(node, |id, _| regions.is_paintable(id)) else {
            return false;
        };
        let next = if self.erasing {
            "#FFFFFF".to_string()
        } else {
            self.color.clone()
        };
        let prev = doc.tree.attr(target, "fill").map(str::to_string);
        if !self.engine.paint(doc, target, true, &next) {
            return false;
        }
        self.feedback.tick();
        let page = self.pages.get(self.index).cloned().unwrap_or_default();
        self.tracker.on_paint(
            self.store.as_mut(),
            self.feedback.as_mut(),
            &page,
            target,
            prev.as_deref(),
            &next,
        );
        true
    }

    /// Revert the latest paint. Progress and awards are deliberately left
    /// alone.
    pub fn undo(&mut self) -> bool {
        match self.doc.as_mut() {
            Some(doc) => self.engine.undo(doc),
            None => false,
        }
    }

    /// Re-apply the latest undone paint.
    pub fn redo(&mut self) -> bool {
        match self.doc.as_mut() {
            Some(doc) => self.engine.redo(doc),
            None => false,
        }
    }

    // === Collaborator surfaces ===

    /// The mounted document, for the export collaborator.
    pub fn document(&self) -> Option<&SvgDocument> {
        self.doc.as_ref()
    }

    /// Region table for the mounted document.
    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    /// Paint engine state (stack depths) for debugging surfaces.
    pub fn paint_engine(&self) -> &PaintEngine {
        &self.engine
    }

    /// Serialize the live tree for export, with white strokes forced to
    /// black for print contrast.
    pub fn export_markup(&self) -> Option<String> {
        self.doc.as_ref().map(|doc| {
            write_markup(
                doc,
                SerializeOptions {
                    force_black_strokes: true,
                },
            )
        })
    }

    /// Whether the mounted page holds its award.
    pub fn current_page_starred(&mut self) -> bool {
        match self.current_page_id().map(str::to_string) {
            Some(page) => self.store.star(&page),
            None => false,
        }
    }

    /// Persisted unique-paint count for the mounted page.
    pub fn current_unique_count(&mut self) -> u32 {
        match self.current_page_id().map(str::to_string) {
            Some(page) => self.store.unique_count(&page),
            None => 0,
        }
    }

    /// Book-level progress for the header UI.
    pub fn progress_summary(&mut self) -> ProgressSummary {
        let stars = self.store.stars_total();
        let total_pages = self.pages.len();
        let percent = if total_pages > 0 {
            (((stars as f64) / (total_pages as f64)) * 100.0).ceil().min(100.0) as u32
        } else {
            0
        };
        ProgressSummary {
            stars,
            total_pages,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::NullFeedback;
    use crate::source::MemorySource;
    use crate::store::MemoryStore;

    fn two_page_session() -> Session {
        let mut source = MemorySource::new();
        source.insert(
            "1.svg",
            r##"<svg viewBox="0 0 10 10"><path id="a" fill="#fff" stroke="#000"/></svg>"##,
        );
        source.insert(
            "2.svg",
            r##"<svg viewBox="0 0 10 10"><rect fill="#fff" stroke="#000"/></svg>"##,
        );
        let mut session = Session::new(
            Box::new(source),
            Box::new(MemoryStore::new()),
            Box::new(NullFeedback),
            SessionConfig::default(),
        );
        session.set_pages(vec!["1.svg".into(), "2.svg".into()]);
        session
    }

    #[test]
    fn test_label_and_navigation_clamping() {
        let mut session = two_page_session();
        session.load_page(0).unwrap();
        assert_eq!(session.page_label(), "1 / 2");
        assert!(session.prev_page().is_none());
        session.next_page().unwrap().unwrap();
        assert_eq!(session.current_index(), 1);
        assert!(session.next_page().is_none());
    }

    #[test]
    fn test_stale_load_superseded() {
        let mut session = two_page_session();
        let stale = session.begin_load(0).unwrap();
        let fresh = session.begin_load(1).unwrap();
        let fresh_text = r##"<svg><rect fill="#fff" stroke="#000"/></svg>"##;
        assert_eq!(
            session.complete_load(fresh, fresh_text).unwrap(),
            LoadOutcome::Mounted
        );
        assert_eq!(
            session
                .complete_load(stale, "<svg><path/></svg>")
                .unwrap(),
            LoadOutcome::Superseded
        );
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_set_pages_invalidates_in_flight_loads() {
        let mut session = two_page_session();
        session.load_page(1).unwrap();
        let ticket = session.begin_load(1).unwrap();
        // the list shrinks under the outstanding ticket
        session.set_pages(vec!["1.svg".into()]);
        assert_eq!(
            session
                .complete_load(ticket, r##"<svg><rect fill="#fff" stroke="#000"/></svg>"##)
                .unwrap(),
            LoadOutcome::Superseded
        );
    }

    #[test]
    fn test_remount_drops_stale_region_snapshots() {
        let mut source = MemorySource::new();
        source.insert(
            "1.svg",
            r##"<svg viewBox="0 0 10 10">
                <path fill="#fff" stroke="#000"/>
                <path fill="#fff" stroke="#000"/>
                <path fill="#fff" stroke="#000"/>
            </svg>"##,
        );
        source.insert(
            "2.svg",
            r##"<svg viewBox="0 0 10 10"><rect fill="#fff" stroke="#000"/></svg>"##,
        );
        let mut session = Session::new(
            Box::new(source),
            Box::new(MemoryStore::new()),
            Box::new(NullFeedback),
            SessionConfig::default(),
        );
        session.set_pages(vec!["1.svg".into(), "2.svg".into()]);
        session.load_page(0).unwrap();
        assert_eq!(session.regions().len(), 4); // background + 3 paths
        session.load_page(1).unwrap();
        assert_eq!(session.regions().len(), 2, "old snapshots do not leak");
    }

    #[test]
    fn test_parse_failure_leaves_page_mounted() {
        let mut session = two_page_session();
        session.load_page(0).unwrap();
        let ticket = session.begin_load(1).unwrap();
        assert!(session.complete_load(ticket, "not markup").is_err());
        assert_eq!(session.current_page_id(), Some("1.svg"));
        assert!(session.document().is_some());
    }

    #[test]
    fn test_page_change_clears_stacks() {
        let mut session = two_page_session();
        session.load_page(0).unwrap();
        let target = session.document().unwrap().elements()[1];
        assert!(session.click(target));
        assert_eq!(session.paint_engine().undo_depth(), 1);
        session.load_page(1).unwrap();
        assert_eq!(session.paint_engine().undo_depth(), 0);
        assert_eq!(session.paint_engine().redo_depth(), 0);
    }

    #[test]
    fn test_eraser_paints_white() {
        let mut session = two_page_session();
        session.load_page(0).unwrap();
        let target = session.document().unwrap().elements()[1];
        session.set_color("#ff0000");
        assert!(session.click(target));
        assert!(session.toggle_eraser());
        assert!(session.click(target));
        let doc = session.document().unwrap();
        assert_eq!(doc.tree.attr(target, "fill"), Some("#FFFFFF"));
        session.set_color("#00ff00");
        assert!(!session.erasing(), "picking a color leaves eraser mode");
    }
}
