//! # wayfinder-retrieval
//!
//! Read-only helpers over a content store: case-insensitive keyword search
//! and the audience relevance filter for examples and solutions. Both keep
//! the store's source order; neither ranks.

pub mod relevance;
pub mod search;

pub use relevance::{select_examples, select_solutions};
pub use search::SearchIndex;
