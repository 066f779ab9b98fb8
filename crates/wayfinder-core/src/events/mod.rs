//! Analytics boundary for Wayfinder.
//! Trait with no-op defaults, synchronous fire-and-forget dispatch.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::AnalyticsDispatcher;
pub use handler::{AnalyticsSink, NoopSink};
pub use types::*;
