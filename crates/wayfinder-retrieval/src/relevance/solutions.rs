use tracing::trace;

use wayfinder_core::models::{GuidanceEntry, ResourceLevel, Solution};

use super::filter_or_all;

/// Solutions a business can resource, in their original order.
///
/// Keeps solutions at or below `max_level`; `None` keeps everything. When no
/// solution fits the budget, all of them are returned.
pub fn select_solutions(entry: &GuidanceEntry, max_level: Option<ResourceLevel>) -> Vec<&Solution> {
    match max_level {
        None => entry.solutions.iter().collect(),
        Some(max) => {
            let selected = filter_or_all(&entry.solutions, |s| s.resource_level <= max);
            trace!(
                question_id = %entry.question_id,
                budget = max.as_str(),
                selected = selected.len(),
                "solutions selected"
            );
            selected
        }
    }
}
