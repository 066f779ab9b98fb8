//! Keyword search configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// Cap on returned matches. Default: unlimited.
    pub max_results: Option<usize>,
}
