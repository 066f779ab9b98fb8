//! petgraph view of the resolvable cross-references in a store.

use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use crate::store::ContentStore;

/// A node in the reference graph, one per entry.
#[derive(Debug, Clone)]
pub struct ReferenceNode {
    pub question_id: String,
    /// Position of the entry in the store's source order.
    pub position: usize,
}

/// Directed graph of entry → related entry, dangling targets excluded.
pub struct ReferenceGraph {
    pub graph: DiGraph<ReferenceNode, ()>,
    /// Map from question_id → NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<String, NodeIndex>,
}

impl ReferenceGraph {
    /// Materialise the graph from a store. Repeated links collapse to one edge.
    pub fn from_store(store: &ContentStore) -> Self {
        let mut graph = DiGraph::with_capacity(store.len(), store.len());
        let mut node_index = FxHashMap::default();

        for (position, entry) in store.iter().enumerate() {
            let idx = graph.add_node(ReferenceNode {
                question_id: entry.question_id.clone(),
                position,
            });
            node_index.insert(entry.question_id.clone(), idx);
        }

        for entry in store.iter() {
            let Some(&from) = node_index.get(&entry.question_id) else {
                continue;
            };
            for reference in &entry.related_questions {
                if let Some(&to) = node_index.get(&reference.question_id) {
                    graph.update_edge(from, to, ());
                }
            }
        }

        Self { graph, node_index }
    }

    /// Look up a node index by question ID.
    pub fn get_node(&self, question_id: &str) -> Option<NodeIndex> {
        self.node_index.get(question_id).copied()
    }

    pub fn question_id(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].question_id
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
