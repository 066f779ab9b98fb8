//! Session timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{EXIT_HOLD_DELAY, NAVIGATION_DELAY};

/// Delays driving the session state machine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Milliseconds closed content stays readable. Default: 300.
    pub exit_hold_ms: Option<u64>,
    /// Milliseconds between close and reopen while navigating. Default: 150.
    pub navigation_delay_ms: Option<u64>,
}

impl SessionConfig {
    pub fn effective_exit_hold(&self) -> Duration {
        self.exit_hold_ms
            .map(Duration::from_millis)
            .unwrap_or(EXIT_HOLD_DELAY)
    }

    pub fn effective_navigation_delay(&self) -> Duration {
        self.navigation_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(NAVIGATION_DELAY)
    }
}
