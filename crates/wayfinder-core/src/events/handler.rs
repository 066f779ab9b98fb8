//! AnalyticsSink trait, all methods with no-op defaults.

use super::types::*;

/// Receiver for session analytics.
///
/// Every method is a fire-and-forget notification: the engine never reads a
/// result and never waits on a sink. Sinks only override the events they
/// care about. `Send + Sync` because timer-driven transitions fire from
/// runtime tasks.
pub trait AnalyticsSink: Send + Sync {
    fn on_open(&self, _event: &OpenEvent) {}
    fn on_close(&self, _event: &CloseEvent) {}
    fn on_section_toggle(&self, _event: &SectionToggleEvent) {}
    fn on_feedback(&self, _event: &FeedbackEvent) {}
    fn on_missing_content(&self, _event: &MissingContentEvent) {}
}

/// Sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {}
