//! ContentStore: owns every guidance entry plus its lookup indexes.

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use wayfinder_core::errors::{ContentError, ContentResult};
use wayfinder_core::models::{Category, GuidanceEntry, ModuleCode, ModuleGroup};

use crate::graph::{self, ResolvedRelated};

/// Immutable collection of guidance entries.
///
/// Indexes hold positions into `entries`, so every lookup preserves the
/// order of the source list.
#[derive(Debug, Default)]
pub struct ContentStore {
    entries: Vec<GuidanceEntry>,
    by_id: FxHashMap<String, usize>,
    by_module: FxHashMap<ModuleCode, Vec<usize>>,
    by_module_group: FxHashMap<ModuleGroup, Vec<usize>>,
    by_category: FxHashMap<Category, Vec<usize>>,
    module_order: Vec<ModuleCode>,
    category_order: Vec<Category>,
}

impl ContentStore {
    /// Build the store and its indexes.
    ///
    /// Fails on the first repeated or empty `question_id`; nothing is
    /// silently dropped.
    pub fn build(entries: Vec<GuidanceEntry>) -> ContentResult<Self> {
        let mut store = Self {
            by_id: FxHashMap::with_capacity_and_hasher(entries.len(), Default::default()),
            ..Self::default()
        };

        for (index, entry) in entries.iter().enumerate() {
            if entry.question_id.trim().is_empty() {
                return Err(ContentError::EmptyQuestionId { index });
            }
            if let Some(&first_index) = store.by_id.get(&entry.question_id) {
                return Err(ContentError::DuplicateQuestionId {
                    question_id: entry.question_id.clone(),
                    first_index,
                    duplicate_index: index,
                });
            }
            store.by_id.insert(entry.question_id.clone(), index);

            let modules = store.by_module.entry(entry.module_code.clone()).or_default();
            if modules.is_empty() {
                store.module_order.push(entry.module_code.clone());
            }
            modules.push(index);

            store
                .by_module_group
                .entry(entry.module_group.clone())
                .or_default()
                .push(index);

            let categories = store.by_category.entry(entry.category.clone()).or_default();
            if categories.is_empty() {
                store.category_order.push(entry.category.clone());
            }
            categories.push(index);
        }
        store.entries = entries;

        for entry in &store.entries {
            for reference in &entry.related_questions {
                if !store.exists(&reference.question_id) {
                    warn!(
                        from = %entry.question_id,
                        to = %reference.question_id,
                        "dangling related-question reference"
                    );
                }
            }
        }

        info!(
            entries = store.entries.len(),
            modules = store.module_order.len(),
            categories = store.category_order.len(),
            "content store built"
        );

        Ok(store)
    }

    pub fn get_by_id(&self, question_id: &str) -> Option<&GuidanceEntry> {
        self.by_id.get(question_id).map(|&i| &self.entries[i])
    }

    pub fn exists(&self, question_id: &str) -> bool {
        self.by_id.contains_key(question_id)
    }

    /// Entries in `module`, in source order. Empty for an unknown module.
    pub fn get_by_module(&self, module: &ModuleCode) -> Vec<&GuidanceEntry> {
        self.collect(self.by_module.get(module))
    }

    pub fn get_by_module_group(&self, group: &ModuleGroup) -> Vec<&GuidanceEntry> {
        self.collect(self.by_module_group.get(group))
    }

    /// Entries in `category`, in source order. Empty for an unknown category.
    pub fn get_by_category(&self, category: &Category) -> Vec<&GuidanceEntry> {
        self.collect(self.by_category.get(category))
    }

    /// Distinct module codes in first-seen order.
    pub fn modules(&self) -> &[ModuleCode] {
        &self.module_order
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> &[Category] {
        &self.category_order
    }

    /// All entries in source order.
    pub fn iter(&self) -> impl Iterator<Item = &GuidanceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `entry`'s related questions against this store.
    pub fn resolve_related<'a>(&'a self, entry: &'a GuidanceEntry) -> Vec<ResolvedRelated<'a>> {
        graph::resolve_related(self, entry)
    }

    fn collect(&self, positions: Option<&Vec<usize>>) -> Vec<&GuidanceEntry> {
        positions
            .map(|p| p.iter().map(|&i| &self.entries[i]).collect())
            .unwrap_or_default()
    }
}
