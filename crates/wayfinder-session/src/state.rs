//! Session phase and the generation-tokened timer slots.

use std::collections::BTreeSet;

use serde::Serialize;
use tokio::task::JoinHandle;

use wayfinder_core::models::GuidanceSection;

/// Where the session is in its open/close cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Nothing presented. Closed content may still be readable until the
    /// exit-hold delay elapses.
    Closed,
    Open,
    /// Closed on the way to a related entry; the reopen is pending.
    Transitioning,
}

#[derive(Debug)]
pub(crate) struct SessionState {
    pub phase: Phase,
    pub active_entry_id: Option<String>,
    pub expanded: BTreeSet<GuidanceSection>,
    /// Bumped by every accepted request. Timers carry the value current when
    /// they were scheduled and do nothing if it has moved on.
    pub generation: u64,
    pub pending_clear: Option<JoinHandle<()>>,
    pub pending_reopen: Option<JoinHandle<()>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Closed,
            active_entry_id: None,
            expanded: BTreeSet::new(),
            generation: 0,
            pending_clear: None,
            pending_reopen: None,
        }
    }

    /// Invalidate and abort every pending timer. Returns the new generation.
    pub fn advance_generation(&mut self) -> u64 {
        if let Some(handle) = self.pending_clear.take() {
            handle.abort();
        }
        if let Some(handle) = self.pending_reopen.take() {
            handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
