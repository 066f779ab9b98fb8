//! SessionController: open, close, and navigate between guidance entries.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, ReentrantMutex};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info_span, warn, Instrument, Span};

use wayfinder_content::ContentStore;
use wayfinder_core::config::WayfinderConfig;
use wayfinder_core::errors::SessionError;
use wayfinder_core::events::{
    AnalyticsDispatcher, AnalyticsSink, CloseEvent, ContentRequest, FeedbackEvent,
    MissingContentEvent, OpenEvent, SectionToggleEvent,
};
use wayfinder_core::models::{AudienceTag, GuidanceEntry, GuidanceSection, ResourceLevel};
use wayfinder_retrieval::SearchIndex;

use crate::state::{Phase, SessionState};
use crate::view::EntryView;

/// What happened to an open or navigate request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The entry is now open.
    Opened,
    /// The current entry closed; the target opens after the navigation delay.
    Navigating,
    /// The store has no such entry. Session state is unchanged.
    MissingContent,
}

/// Owns the session state machine.
///
/// Closing keeps the closed entry readable for the exit-hold delay so an exit
/// transition can still render it. Navigating closes the current entry and
/// reopens on the target after the navigation delay. Both deferred steps are
/// cancelled by any later request.
///
/// Must be constructed inside a Tokio runtime; its timers are spawned on the
/// runtime that was current at construction.
pub struct SessionController {
    shared: Arc<Shared>,
    search: SearchIndex,
    runtime: Handle,
}

struct Shared {
    session_id: String,
    store: Arc<ContentStore>,
    dispatcher: AnalyticsDispatcher,
    exit_hold: Duration,
    navigation_delay: Duration,
    state: Mutex<SessionState>,
    /// Held from a transition through its notification, so sinks observe
    /// transitions in the order they were applied, whichever thread a timer
    /// fires on. Reentrant so a sink may call back into the controller.
    emission: ReentrantMutex<()>,
    span: Span,
}

impl SessionController {
    /// Create a controller reporting to a single analytics sink.
    pub fn new(
        store: Arc<ContentStore>,
        sink: Arc<dyn AnalyticsSink>,
        config: &WayfinderConfig,
    ) -> Result<Self, SessionError> {
        Self::with_dispatcher(store, AnalyticsDispatcher::with_sink(sink), config)
    }

    /// Create a controller reporting to every sink registered on `dispatcher`.
    pub fn with_dispatcher(
        store: Arc<ContentStore>,
        dispatcher: AnalyticsDispatcher,
        config: &WayfinderConfig,
    ) -> Result<Self, SessionError> {
        let runtime = Handle::try_current().map_err(|_| SessionError::NoRuntime)?;
        let session_id = uuid::Uuid::new_v4().to_string();
        let span = info_span!("wayfinder.session", session_id = %session_id);
        let search = SearchIndex::from_config(Arc::clone(&store), &config.search);

        let shared = Arc::new(Shared {
            session_id,
            store,
            dispatcher,
            exit_hold: config.session.effective_exit_hold(),
            navigation_delay: config.session.effective_navigation_delay(),
            state: Mutex::new(SessionState::new()),
            emission: ReentrantMutex::new(()),
            span,
        });
        shared.span.in_scope(|| debug!("session created"));

        Ok(Self {
            shared,
            search,
            runtime,
        })
    }

    /// Open `question_id`, cancelling any pending clear or reopen.
    ///
    /// Reopening the entry that is already open is accepted and reported
    /// again. An unknown id is reported through `on_missing_content` and
    /// leaves the session untouched.
    pub fn open_entry(&self, question_id: &str) -> RequestOutcome {
        let _entered = self.shared.span.enter();
        self.shared.open(question_id, ContentRequest::Open)
    }

    /// Close the session. Returns false if it was already closed.
    ///
    /// `on_close` fires only when an entry was open. The closed entry stays
    /// readable until the exit-hold delay elapses.
    pub fn close_session(&self) -> bool {
        let _entered = self.shared.span.enter();
        Shared::close(&self.shared, &self.runtime)
    }

    /// Close the session the way a user dismissing the panel would.
    ///
    /// Same as [`close_session`](Self::close_session); during a navigation it
    /// also abandons the pending reopen.
    pub fn dismiss(&self) -> bool {
        self.close_session()
    }

    /// Close the current entry and open `question_id` after the navigation
    /// delay.
    ///
    /// A second navigation before the delay elapses replaces the first; only
    /// the latest target opens. An unknown target is rejected up front and
    /// the current entry stays open.
    pub fn navigate_to_related(&self, question_id: &str) -> RequestOutcome {
        let _entered = self.shared.span.enter();
        Shared::navigate(&self.shared, &self.runtime, question_id)
    }

    /// Flip a section of the open entry between expanded and collapsed.
    ///
    /// Returns the new expanded state, or `None` when nothing is open or the
    /// entry has no such section.
    pub fn toggle_section(&self, section: GuidanceSection) -> Option<bool> {
        let _entered = self.shared.span.enter();
        let _emission = self.shared.emission.lock();
        let event = {
            let mut state = self.shared.state.lock();
            if state.phase != Phase::Open {
                return None;
            }
            let question_id = state.active_entry_id.clone()?;
            let entry = self.shared.store.get_by_id(&question_id)?;
            if !entry.has_section(section) {
                return None;
            }
            let expanded = if state.expanded.remove(&section) {
                false
            } else {
                state.expanded.insert(section)
            };
            SectionToggleEvent {
                session_id: self.shared.session_id.clone(),
                question_id,
                section,
                expanded,
            }
        };
        debug!(question_id = %event.question_id, %section, expanded = event.expanded, "section toggled");
        self.shared.dispatcher.emit_section_toggle(&event);
        Some(event.expanded)
    }

    /// Record whether the open entry helped. Returns false when nothing is open.
    pub fn submit_feedback(&self, positive: bool) -> bool {
        let _entered = self.shared.span.enter();
        let _emission = self.shared.emission.lock();
        let event = {
            let state = self.shared.state.lock();
            match (state.phase, &state.active_entry_id) {
                (Phase::Open, Some(question_id)) => FeedbackEvent {
                    session_id: self.shared.session_id.clone(),
                    question_id: question_id.clone(),
                    positive,
                },
                _ => return false,
            }
        };
        self.shared.dispatcher.emit_feedback(&event);
        true
    }

    pub fn phase(&self) -> Phase {
        self.shared.state.lock().phase
    }

    /// The entry being presented. Still set while closed, until the
    /// exit-hold delay clears it.
    pub fn active_entry_id(&self) -> Option<String> {
        self.shared.state.lock().active_entry_id.clone()
    }

    pub fn active_entry(&self) -> Option<&GuidanceEntry> {
        let question_id = self.active_entry_id()?;
        self.shared.store.get_by_id(&question_id)
    }

    pub fn expanded_sections(&self) -> BTreeSet<GuidanceSection> {
        self.shared.state.lock().expanded.clone()
    }

    /// Everything needed to render the active entry for `audience`, with
    /// solutions capped at `budget` when given.
    pub fn active_view(
        &self,
        audience: &BTreeSet<AudienceTag>,
        budget: Option<ResourceLevel>,
    ) -> Option<EntryView<'_>> {
        let (phase, question_id, expanded) = {
            let state = self.shared.state.lock();
            (
                state.phase,
                state.active_entry_id.clone()?,
                state.expanded.clone(),
            )
        };
        let entry = self.shared.store.get_by_id(&question_id)?;
        Some(EntryView::build(
            &self.shared.store,
            entry,
            phase,
            expanded,
            audience,
            budget,
        ))
    }

    /// Search the store this session presents.
    pub fn search(&self, query: &str) -> Vec<&GuidanceEntry> {
        self.search.search(query)
    }

    pub fn store(&self) -> &ContentStore {
        &self.shared.store
    }

    pub fn session_id(&self) -> &str {
        &self.shared.session_id
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        self.shared.state.lock().advance_generation();
    }
}

impl std::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("SessionController")
            .field("session_id", &self.shared.session_id)
            .field("phase", &state.phase)
            .field("active_entry_id", &state.active_entry_id)
            .field("generation", &state.generation)
            .finish()
    }
}

impl Shared {
    fn open(&self, question_id: &str, request: ContentRequest) -> RequestOutcome {
        if !self.store.exists(question_id) {
            self.report_missing(question_id, request);
            return RequestOutcome::MissingContent;
        }
        let _emission = self.emission.lock();
        let event = {
            let mut state = self.state.lock();
            self.apply_open(&mut state, question_id)
        };
        self.dispatcher.emit_open(&event);
        RequestOutcome::Opened
    }

    fn apply_open(&self, state: &mut SessionState, question_id: &str) -> OpenEvent {
        state.advance_generation();
        if state.active_entry_id.as_deref() != Some(question_id) {
            state.expanded.clear();
            state.active_entry_id = Some(question_id.to_string());
        }
        state.phase = Phase::Open;
        debug!(question_id, generation = state.generation, "entry opened");
        OpenEvent {
            session_id: self.session_id.clone(),
            question_id: question_id.to_string(),
        }
    }

    fn close(self: &Arc<Self>, runtime: &Handle) -> bool {
        let _emission = self.emission.lock();
        let closed = {
            let mut state = self.state.lock();
            let was_open = match state.phase {
                Phase::Closed => return false,
                Phase::Open => true,
                Phase::Transitioning => false,
            };
            let generation = state.advance_generation();
            state.phase = Phase::Closed;
            if state.active_entry_id.is_some() {
                state.pending_clear = Some(self.schedule_clear(runtime, generation));
            }
            debug!(generation, was_open, "session closed");
            was_open.then(|| state.active_entry_id.clone())
        };
        if let Some(question_id) = closed {
            self.dispatcher.emit_close(&CloseEvent {
                session_id: self.session_id.clone(),
                question_id,
            });
        }
        true
    }

    fn navigate(self: &Arc<Self>, runtime: &Handle, question_id: &str) -> RequestOutcome {
        if !self.store.exists(question_id) {
            self.report_missing(question_id, ContentRequest::Navigate);
            return RequestOutcome::MissingContent;
        }

        // The reopen timer needs the emission gate too, so it cannot notify
        // before the close below has been delivered.
        let _emission = self.emission.lock();
        let closed = {
            let mut state = self.state.lock();
            let was_open = state.phase == Phase::Open;
            let generation = state.advance_generation();
            state.phase = Phase::Transitioning;
            if state.active_entry_id.is_some() {
                state.pending_clear = Some(self.schedule_clear(runtime, generation));
            }
            state.pending_reopen =
                Some(self.schedule_reopen(runtime, generation, question_id.to_string()));
            debug!(to = question_id, generation, "navigating");
            was_open.then(|| state.active_entry_id.clone())
        };

        if let Some(closed_id) = closed {
            self.dispatcher.emit_close(&CloseEvent {
                session_id: self.session_id.clone(),
                question_id: closed_id,
            });
        }
        RequestOutcome::Navigating
    }

    fn schedule_clear(self: &Arc<Self>, runtime: &Handle, generation: u64) -> JoinHandle<()> {
        let shared = Arc::clone(self);
        let deadline = Instant::now() + self.exit_hold;
        runtime.spawn(
            async move {
                tokio::time::sleep_until(deadline).await;
                shared.clear_if_current(generation);
            }
            .instrument(self.span.clone()),
        )
    }

    fn schedule_reopen(
        self: &Arc<Self>,
        runtime: &Handle,
        generation: u64,
        question_id: String,
    ) -> JoinHandle<()> {
        let shared = Arc::clone(self);
        let deadline = Instant::now() + self.navigation_delay;
        runtime.spawn(
            async move {
                tokio::time::sleep_until(deadline).await;
                shared.reopen_if_current(generation, &question_id);
            }
            .instrument(self.span.clone()),
        )
    }

    fn clear_if_current(&self, generation: u64) {
        let mut state = self.state.lock();
        if !state.is_current(generation) || state.phase == Phase::Open {
            return;
        }
        state.pending_clear = None;
        state.active_entry_id = None;
        state.expanded.clear();
        debug!(generation, "closed content cleared");
    }

    fn reopen_if_current(&self, generation: u64, question_id: &str) {
        let _emission = self.emission.lock();
        let event = {
            let mut state = self.state.lock();
            if !state.is_current(generation) || state.phase != Phase::Transitioning {
                return;
            }
            // Detach our own handle so the open below does not abort this task.
            state.pending_reopen = None;
            self.apply_open(&mut state, question_id)
        };
        self.dispatcher.emit_open(&event);
    }

    fn report_missing(&self, question_id: &str, request: ContentRequest) {
        warn!(question_id, ?request, "requested guidance entry not found");
        self.dispatcher.emit_missing_content(&MissingContentEvent {
            session_id: self.session_id.clone(),
            question_id: question_id.to_string(),
            request,
        });
    }
}
