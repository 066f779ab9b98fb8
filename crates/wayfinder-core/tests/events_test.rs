//! Tests for the analytics dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wayfinder_core::events::*;
use wayfinder_core::models::GuidanceSection;

/// A sink that records event names in arrival order.
#[derive(Default)]
struct RecordingSink {
    log: Mutex<Vec<String>>,
}

impl AnalyticsSink for RecordingSink {
    fn on_open(&self, event: &OpenEvent) {
        self.log.lock().unwrap().push(format!("open:{}", event.question_id));
    }

    fn on_close(&self, _event: &CloseEvent) {
        self.log.lock().unwrap().push("close".to_string());
    }

    fn on_section_toggle(&self, event: &SectionToggleEvent) {
        self.log
            .lock()
            .unwrap()
            .push(format!("toggle:{}:{}", event.section, event.expanded));
    }
}

struct PanickingSink;

impl AnalyticsSink for PanickingSink {
    fn on_open(&self, _event: &OpenEvent) {
        panic!("sink failure");
    }
}

struct CountingSink(AtomicUsize);

impl AnalyticsSink for CountingSink {
    fn on_open(&self, _event: &OpenEvent) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

fn open(id: &str) -> OpenEvent {
    OpenEvent {
        session_id: "s1".to_string(),
        question_id: id.to_string(),
    }
}

#[test]
fn noop_defaults_compile_and_ignore_events() {
    let dispatcher = AnalyticsDispatcher::with_sink(Arc::new(NoopSink));
    dispatcher.emit_open(&open("1.1-entrance"));
    dispatcher.emit_feedback(&FeedbackEvent {
        session_id: "s1".to_string(),
        question_id: "1.1-entrance".to_string(),
        positive: true,
    });
    assert_eq!(dispatcher.sink_count(), 1);
}

#[test]
fn events_arrive_in_emission_order() {
    let sink = Arc::new(RecordingSink::default());
    let dispatcher = AnalyticsDispatcher::with_sink(sink.clone());

    dispatcher.emit_open(&open("a"));
    dispatcher.emit_section_toggle(&SectionToggleEvent {
        session_id: "s1".to_string(),
        question_id: "a".to_string(),
        section: GuidanceSection::Tips,
        expanded: true,
    });
    dispatcher.emit_close(&CloseEvent {
        session_id: "s1".to_string(),
        question_id: Some("a".to_string()),
    });

    assert_eq!(
        *sink.log.lock().unwrap(),
        vec!["open:a", "toggle:tips:true", "close"]
    );
}

#[test]
fn panicking_sink_does_not_block_later_sinks() {
    let counter = Arc::new(CountingSink(AtomicUsize::new(0)));
    let mut dispatcher = AnalyticsDispatcher::new();
    dispatcher.register(Arc::new(PanickingSink));
    dispatcher.register(counter.clone());

    dispatcher.emit_open(&open("a"));
    dispatcher.emit_open(&open("b"));

    assert_eq!(counter.0.load(Ordering::Relaxed), 2);
}

#[test]
fn empty_dispatcher_is_inert() {
    let dispatcher = AnalyticsDispatcher::new();
    dispatcher.emit_missing_content(&MissingContentEvent {
        session_id: "s1".to_string(),
        question_id: "nope".to_string(),
        request: ContentRequest::Navigate,
    });
    assert_eq!(dispatcher.sink_count(), 0);
}
