//! Per-session analytics: most opened entries, section engagement,
//! helpfulness, and requests for content the store lacks.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::Serialize;

use wayfinder_core::events::{
    AnalyticsSink, CloseEvent, FeedbackEvent, MissingContentEvent, OpenEvent, SectionToggleEvent,
};

/// Counters accumulated by [`SessionAnalytics`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyticsSnapshot {
    /// Question id → open count.
    pub open_counts: HashMap<String, u64>,
    pub close_count: u64,
    /// Section name → number of times it was expanded.
    pub section_expansions: HashMap<String, u64>,
    pub positive_feedback: u64,
    pub negative_feedback: u64,
    /// Question id → number of requests that found nothing.
    pub missing_content: HashMap<String, u64>,
}

/// In-memory analytics sink. Register it on the controller's dispatcher and
/// read the aggregates back at any time.
#[derive(Debug, Default)]
pub struct SessionAnalytics {
    inner: Mutex<AnalyticsSnapshot>,
}

impl SessionAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> AnalyticsSnapshot {
        self.inner.lock().clone()
    }

    /// Most frequently opened question ids, sorted descending. Ties break on
    /// the id so the ranking is stable.
    pub fn most_opened(&self, limit: usize) -> Vec<(String, u64)> {
        let mut sorted: Vec<_> = self.inner.lock().open_counts.clone().into_iter().collect();
        sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        sorted.truncate(limit);
        sorted
    }

    /// Share of feedback that was positive, or `None` before any feedback.
    pub fn helpfulness_ratio(&self) -> Option<f64> {
        let inner = self.inner.lock();
        let total = inner.positive_feedback + inner.negative_feedback;
        if total == 0 {
            return None;
        }
        Some(inner.positive_feedback as f64 / total as f64)
    }
}

impl AnalyticsSink for SessionAnalytics {
    fn on_open(&self, event: &OpenEvent) {
        *self
            .inner
            .lock()
            .open_counts
            .entry(event.question_id.clone())
            .or_insert(0) += 1;
    }

    fn on_close(&self, _event: &CloseEvent) {
        self.inner.lock().close_count += 1;
    }

    fn on_section_toggle(&self, event: &SectionToggleEvent) {
        if event.expanded {
            *self
                .inner
                .lock()
                .section_expansions
                .entry(event.section.as_str().to_string())
                .or_insert(0) += 1;
        }
    }

    fn on_feedback(&self, event: &FeedbackEvent) {
        let mut inner = self.inner.lock();
        if event.positive {
            inner.positive_feedback += 1;
        } else {
            inner.negative_feedback += 1;
        }
    }

    fn on_missing_content(&self, event: &MissingContentEvent) {
        *self
            .inner
            .lock()
            .missing_content
            .entry(event.question_id.clone())
            .or_insert(0) += 1;
    }
}
