//! Keyword search over entry titles, summaries, and keywords.

mod index;

pub use index::SearchIndex;
