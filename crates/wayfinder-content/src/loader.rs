//! JSON content loading.
//!
//! Content arrives as a JSON array of guidance entries in camelCase.

use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use wayfinder_core::config::ContentConfig;
use wayfinder_core::errors::{ContentError, ContentResult};
use wayfinder_core::models::GuidanceEntry;

use crate::graph;
use crate::store::ContentStore;

/// Parse a JSON array of entries. `source_name` only labels errors.
pub fn parse_entries(json: &str, source_name: &str) -> ContentResult<Vec<GuidanceEntry>> {
    serde_json::from_str(json).map_err(|e| ContentError::ParseError {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

/// Read and parse a JSON content file.
pub fn read_entries(path: &Path) -> ContentResult<Vec<GuidanceEntry>> {
    let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ContentError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => ContentError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        },
    })?;
    parse_entries(&json, &path.display().to_string())
}

impl ContentStore {
    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        Self::build(parse_entries(json, "<string>")?)
    }

    pub fn from_json_file(path: &Path) -> ContentResult<Self> {
        Self::build(read_entries(path)?)
    }

    /// Build from the configured content file, running the cross-reference
    /// audit afterwards when enabled. With no path configured the store is
    /// empty.
    pub fn from_config(config: &ContentConfig) -> ContentResult<Self> {
        let store = match config.path.as_deref() {
            Some(path) => Self::from_json_file(Path::new(path))?,
            None => Self::build(Vec::new())?,
        };

        if config.effective_audit_on_load() {
            let report = graph::audit(&store);
            info!(
                dangling = report.dangling.len(),
                self_references = report.self_references.len(),
                one_way = report.one_way.len(),
                cycles = report.cycles.len(),
                orphans = report.orphans.len(),
                "cross-reference audit complete"
            );
        }

        Ok(store)
    }
}
