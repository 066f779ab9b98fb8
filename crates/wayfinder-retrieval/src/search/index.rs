//! SearchIndex: lowercased copies of the searchable fields, built once.

use std::sync::Arc;

use tracing::debug;

use wayfinder_content::ContentStore;
use wayfinder_core::config::SearchConfig;
use wayfinder_core::models::{GuidanceEntry, ModuleCode};

/// Normalised searchable text for one entry, aligned with store order.
#[derive(Debug)]
struct IndexedDocument {
    title: String,
    summary: String,
    keywords: Vec<String>,
}

impl IndexedDocument {
    fn from_entry(entry: &GuidanceEntry) -> Self {
        Self {
            title: normalize(&entry.title),
            summary: normalize(&entry.summary),
            keywords: entry.keywords.iter().map(|k| normalize(k)).collect(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.title.contains(needle)
            || self.summary.contains(needle)
            || self.keywords.iter().any(|k| k.contains(needle))
    }
}

/// Lowercase and collapse runs of whitespace to single spaces.
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Substring search across a content store.
///
/// Matching is plain containment; results come back in store order, never
/// by match strength.
#[derive(Debug)]
pub struct SearchIndex {
    store: Arc<ContentStore>,
    documents: Vec<IndexedDocument>,
    max_results: Option<usize>,
}

impl SearchIndex {
    pub fn build(store: Arc<ContentStore>) -> Self {
        let documents = store.iter().map(IndexedDocument::from_entry).collect();
        Self {
            store,
            documents,
            max_results: None,
        }
    }

    pub fn from_config(store: Arc<ContentStore>, config: &SearchConfig) -> Self {
        Self::build(store).with_max_results(config.max_results)
    }

    /// Cap the number of results. `None` means unlimited.
    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    /// Entries whose title, summary, or any keyword contains `query`,
    /// case-insensitively. An empty or whitespace-only query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&GuidanceEntry> {
        self.search_where(query, |_| true)
    }

    /// Like [`search`](Self::search), restricted to one module.
    pub fn search_in_module(&self, query: &str, module: &ModuleCode) -> Vec<&GuidanceEntry> {
        self.search_where(query, |entry| &entry.module_code == module)
    }

    fn search_where<F>(&self, query: &str, filter: F) -> Vec<&GuidanceEntry>
    where
        F: Fn(&GuidanceEntry) -> bool,
    {
        let needle = normalize(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let limit = self.max_results.unwrap_or(usize::MAX);
        let results: Vec<&GuidanceEntry> = self
            .store
            .iter()
            .zip(&self.documents)
            .filter(|(entry, doc)| filter(*entry) && doc.matches(&needle))
            .map(|(entry, _)| entry)
            .take(limit)
            .collect();

        debug!(query = %needle, matches = results.len(), "search complete");
        results
    }
}
