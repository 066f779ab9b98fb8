//! # wayfinder-core
//!
//! Foundation crate for the Wayfinder guidance engine.
//! Defines the guidance data model, config, errors, analytics events,
//! tracing setup, and constants. Every other crate in the workspace
//! depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::WayfinderConfig;
pub use errors::{ConfigError, ContentError, SessionError, WayfinderErrorCode};
pub use events::{AnalyticsDispatcher, AnalyticsSink, NoopSink};
pub use models::{
    AudienceTag, Category, Example, GuidanceEntry, GuidanceSection, ModuleCode, ModuleGroup,
    RelatedQuestionRef, ResourceLevel, Solution,
};
