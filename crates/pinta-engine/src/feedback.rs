//! Feedback collaborator seam.
//!
//! Audio and UI feedback live outside the engine; the engine only emits
//! notifications and never depends on the sink's success.

/// Receiver for best-effort feedback events.
pub trait FeedbackSink {
    /// A soft tick: successful paint or page mount.
    fn tick(&mut self) {}

    /// A page crossed its completion threshold.
    fn star_awarded(&mut self, _page: &str) {}
}

/// Sink that swallows everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {}
