//! pinta Engine - coloring-book core
//!
//! Everything between a parsed page and the UI shell: region
//! classification, the document normalizer, the paint/undo state engine,
//! unique-paint progress tracking, and the session context that ties them
//! to a page source and a persisted progress store.

mod classify;
mod feedback;
mod normalize;
mod paint;
mod progress;
mod region;
mod session;
mod source;
mod store;

pub use classify::is_paintable;
pub use feedback::{FeedbackSink, NullFeedback};
pub use normalize::{A4_HEIGHT, A4_WIDTH, prepare_document};
pub use paint::{ActionRecord, PaintEngine};
pub use progress::ProgressTracker;
pub use region::{RegionInfo, Regions};
pub use session::{LoadOutcome, LoadTicket, ProgressSummary, Session, SessionConfig};
pub use source::{DirSource, MemorySource, PageSource};
pub use store::{JsonStore, MemoryStore, ProgressRecords, ProgressStore};

/// Page load error.
///
/// Every load failure leaves the previously mounted page fully
/// interactive; callers surface the message in place of the drawing
/// surface and move on.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("page {page} could not be read: {reason}")]
    Read { page: String, reason: String },

    #[error(transparent)]
    Parse(#[from] pinta_svg::ParseError),

    #[error("no pages available")]
    NoPages,
}
