//! Cross-references between entries.
//!
//! There is no stored graph: links live on each entry as weak by-id
//! references and are resolved against the store when traversed. The
//! petgraph view in `reference_graph` is materialised only for audits.

pub mod audit;
pub mod reference_graph;
pub mod resolve;
pub mod traversal;

pub use audit::{audit, CrossLink, IntegrityReport};
pub use resolve::{resolve_related, ResolvedRelated};
pub use traversal::{related_within, RelatedHop};
