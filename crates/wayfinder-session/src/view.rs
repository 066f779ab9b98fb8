//! Read-only view of the active entry, filtered for a reader.

use std::collections::BTreeSet;

use wayfinder_content::{ContentStore, ResolvedRelated};
use wayfinder_core::models::{
    AudienceTag, Example, GuidanceEntry, GuidanceSection, ResourceLevel, Solution,
};
use wayfinder_retrieval::{select_examples, select_solutions};

use crate::state::Phase;

/// The active entry plus the audience-filtered pieces a presentation layer
/// renders. Borrowed from the store; never mutates session state.
#[derive(Debug)]
pub struct EntryView<'a> {
    pub entry: &'a GuidanceEntry,
    /// `Closed` while the entry lingers through the exit-hold delay.
    pub phase: Phase,
    pub examples: Vec<&'a Example>,
    pub solutions: Vec<&'a Solution>,
    pub related: Vec<ResolvedRelated<'a>>,
    pub expanded: BTreeSet<GuidanceSection>,
}

impl<'a> EntryView<'a> {
    pub(crate) fn build(
        store: &'a ContentStore,
        entry: &'a GuidanceEntry,
        phase: Phase,
        expanded: BTreeSet<GuidanceSection>,
        audience: &BTreeSet<AudienceTag>,
        budget: Option<ResourceLevel>,
    ) -> Self {
        Self {
            entry,
            phase,
            examples: select_examples(entry, audience),
            solutions: select_solutions(entry, budget),
            related: store.resolve_related(entry),
            expanded,
        }
    }

    pub fn is_expanded(&self, section: GuidanceSection) -> bool {
        self.expanded.contains(&section)
    }

    /// Related entries that can actually be navigated to.
    pub fn available_related(&self) -> impl Iterator<Item = &ResolvedRelated<'a>> {
        self.related.iter().filter(|r| r.is_available())
    }
}
