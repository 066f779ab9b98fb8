//! # wayfinder-session
//!
//! The single mutable surface of the engine: which guidance entry is
//! presented, and how a user opens, closes, and hops between entries.
//!
//! Deferred transitions (clearing closed content, reopening during
//! navigation) run as Tokio timer tasks keyed by a generation token. Every
//! new request advances the generation, so a stale timer can never undo a
//! newer transition.

pub mod analytics;
pub mod controller;
pub mod state;
pub mod view;

pub use analytics::{AnalyticsSnapshot, SessionAnalytics};
pub use controller::{RequestOutcome, SessionController};
pub use state::Phase;
pub use view::EntryView;
