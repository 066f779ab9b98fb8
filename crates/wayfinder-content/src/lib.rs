//! # wayfinder-content
//!
//! The guidance content store: built once from a list of entries, then
//! read-only and safe to share across any number of readers.
//!
//! Cross-references between entries are weak by-id links. They are
//! resolved against the store on demand; a link whose target is missing
//! resolves to "unavailable" without affecting its siblings.

pub mod graph;
pub mod loader;
pub mod store;

pub use graph::{audit, related_within, resolve_related, IntegrityReport, ResolvedRelated};
pub use store::ContentStore;
