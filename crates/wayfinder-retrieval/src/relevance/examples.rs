use std::collections::BTreeSet;

use tracing::trace;

use wayfinder_core::models::{AudienceTag, Example, GuidanceEntry};

use super::filter_or_all;

/// Worked examples relevant to `audience`, in their original order.
///
/// - Empty audience: every example (the caller has not said who it is).
/// - Otherwise: examples tagged with one of the audience tags, plus
///   `general` examples.
/// - No match: every example.
pub fn select_examples<'a>(
    entry: &'a GuidanceEntry,
    audience: &BTreeSet<AudienceTag>,
) -> Vec<&'a Example> {
    if audience.is_empty() {
        return entry.examples.iter().collect();
    }

    let selected = filter_or_all(&entry.examples, |example| {
        example.audience.is_general() || audience.contains(&example.audience)
    });
    trace!(
        question_id = %entry.question_id,
        selected = selected.len(),
        total = entry.examples.len(),
        "examples selected"
    );
    selected
}
