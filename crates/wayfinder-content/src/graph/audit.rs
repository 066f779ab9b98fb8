//! Content integrity audit over the cross-reference graph.
//!
//! Only dangling links and self-references indicate broken content.
//! One-way links, cycles, and orphans are legal and reported for authors.

use petgraph::algo::tarjan_scc;
use petgraph::Direction;
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::store::ContentStore;

use super::reference_graph::ReferenceGraph;

/// A directed link between two question ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossLink {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    /// Links whose target is not in the store.
    pub dangling: Vec<CrossLink>,
    /// Entries listing themselves as related.
    pub self_references: Vec<String>,
    /// Resolvable links A → B where B does not link back to A.
    pub one_way: Vec<CrossLink>,
    /// Groups of two or more entries that reach each other.
    pub cycles: Vec<Vec<String>>,
    /// Entries no other entry links to.
    pub orphans: Vec<String>,
}

impl IntegrityReport {
    /// True when no link is broken.
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.self_references.is_empty()
    }
}

/// Audit every cross-reference in `store`. Results follow source order.
pub fn audit(store: &ContentStore) -> IntegrityReport {
    let mut report = IntegrityReport::default();

    for entry in store.iter() {
        for reference in &entry.related_questions {
            if !store.exists(&reference.question_id) {
                report.dangling.push(CrossLink {
                    from: entry.question_id.clone(),
                    to: reference.question_id.clone(),
                });
            } else if reference.question_id == entry.question_id
                && !report.self_references.contains(&entry.question_id)
            {
                report.self_references.push(entry.question_id.clone());
            }
        }
    }

    let graph = ReferenceGraph::from_store(store);

    let mut seen_links = FxHashSet::default();
    for entry in store.iter() {
        let Some(from) = graph.get_node(&entry.question_id) else {
            continue;
        };
        for reference in &entry.related_questions {
            let Some(to) = graph.get_node(&reference.question_id) else {
                continue;
            };
            if to == from || !seen_links.insert((from, to)) {
                continue;
            }
            if graph.graph.find_edge(to, from).is_none() {
                report.one_way.push(CrossLink {
                    from: entry.question_id.clone(),
                    to: reference.question_id.clone(),
                });
            }
        }

        let has_incoming = graph
            .graph
            .neighbors_directed(from, Direction::Incoming)
            .any(|n| n != from);
        if !has_incoming {
            report.orphans.push(entry.question_id.clone());
        }
    }

    let mut cycles: Vec<Vec<(usize, String)>> = tarjan_scc(&graph.graph)
        .into_iter()
        .filter(|component| component.len() > 1)
        .map(|component| {
            let mut members: Vec<(usize, String)> = component
                .into_iter()
                .map(|idx| (graph.graph[idx].position, graph.question_id(idx).to_string()))
                .collect();
            members.sort();
            members
        })
        .collect();
    cycles.sort();
    report.cycles = cycles
        .into_iter()
        .map(|members| members.into_iter().map(|(_, id)| id).collect())
        .collect();

    report
}
