//! AnalyticsDispatcher: synchronous fan-out to registered sinks.

use std::sync::Arc;

use super::handler::AnalyticsSink;
use super::types::*;

/// Synchronous dispatcher wrapping a list of sinks.
///
/// Events reach sinks in registration order. A sink that panics is logged
/// and skipped; it never unwinds into the session controller.
#[derive(Default)]
pub struct AnalyticsDispatcher {
    sinks: Vec<Arc<dyn AnalyticsSink>>,
}

impl AnalyticsDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Dispatcher with a single sink already registered.
    pub fn with_sink(sink: Arc<dyn AnalyticsSink>) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(sink);
        dispatcher
    }

    /// Register a sink.
    pub fn register(&mut self, sink: Arc<dyn AnalyticsSink>) {
        self.sinks.push(sink);
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    fn emit<F: Fn(&dyn AnalyticsSink)>(&self, event_name: &'static str, f: F) {
        for sink in &self.sinks {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(sink.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event = event_name, "analytics sink panicked");
            }
        }
    }

    pub fn emit_open(&self, event: &OpenEvent) {
        self.emit("open", |s| s.on_open(event));
    }

    pub fn emit_close(&self, event: &CloseEvent) {
        self.emit("close", |s| s.on_close(event));
    }

    pub fn emit_section_toggle(&self, event: &SectionToggleEvent) {
        self.emit("section_toggle", |s| s.on_section_toggle(event));
    }

    pub fn emit_feedback(&self, event: &FeedbackEvent) {
        self.emit("feedback", |s| s.on_feedback(event));
    }

    pub fn emit_missing_content(&self, event: &MissingContentEvent) {
        self.emit("missing_content", |s| s.on_missing_content(event));
    }
}

impl std::fmt::Debug for AnalyticsDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsDispatcher")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
