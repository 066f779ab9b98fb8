//! Content source configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Path to a JSON array of guidance entries.
    pub path: Option<String>,
    /// Run the cross-reference audit after loading. Default: true.
    pub audit_on_load: Option<bool>,
}

impl ContentConfig {
    pub fn effective_audit_on_load(&self) -> bool {
        self.audit_on_load.unwrap_or(true)
    }
}
