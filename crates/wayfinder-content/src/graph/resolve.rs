//! Weak, by-id resolution of related-question references.

use wayfinder_core::models::{GuidanceEntry, RelatedQuestionRef};

use crate::store::ContentStore;

/// A related-question reference paired with its target, if the store has it.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRelated<'a> {
    pub reference: &'a RelatedQuestionRef,
    pub target: Option<&'a GuidanceEntry>,
}

impl ResolvedRelated<'_> {
    /// False when the reference dangles and should render as unavailable.
    pub fn is_available(&self) -> bool {
        self.target.is_some()
    }
}

/// Resolve each of `entry`'s related references independently, in order.
pub fn resolve_related<'a>(
    store: &'a ContentStore,
    entry: &'a GuidanceEntry,
) -> Vec<ResolvedRelated<'a>> {
    entry
        .related_questions
        .iter()
        .map(|reference| ResolvedRelated {
            reference,
            target: store.get_by_id(&reference.question_id),
        })
        .collect()
}
