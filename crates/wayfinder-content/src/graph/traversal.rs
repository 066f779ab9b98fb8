//! Breadth-first walk over resolvable related entries.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use wayfinder_core::models::GuidanceEntry;

use crate::store::ContentStore;

/// An entry reached from the origin, with its hop count.
#[derive(Debug, Clone, Copy)]
pub struct RelatedHop<'a> {
    pub entry: &'a GuidanceEntry,
    pub depth: usize,
}

/// Entries reachable from `question_id` within `max_depth` hops, each once,
/// in breadth-first order. Dangling links are skipped; the origin is never
/// included.
pub fn related_within<'a>(
    store: &'a ContentStore,
    question_id: &str,
    max_depth: usize,
) -> Vec<RelatedHop<'a>> {
    let mut result = Vec::new();
    let Some(origin) = store.get_by_id(question_id) else {
        return result;
    };

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    visited.insert(origin.question_id.as_str());
    let mut queue = VecDeque::from([(origin, 0usize)]);

    while let Some((entry, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        for reference in &entry.related_questions {
            let Some(next) = store.get_by_id(&reference.question_id) else {
                continue;
            };
            if visited.insert(next.question_id.as_str()) {
                result.push(RelatedHop {
                    entry: next,
                    depth: depth + 1,
                });
                queue.push_back((next, depth + 1));
            }
        }
    }

    result
}
