//! Guidance content model.
//!
//! A [`GuidanceEntry`] is built once when the content store is loaded and is
//! never mutated afterwards.

pub mod classification;
pub mod entry;
pub mod example;
pub mod related;
pub mod sections;
pub mod solution;

pub use classification::{AudienceTag, Category, ModuleCode, ModuleGroup};
pub use entry::{GuidanceEntry, GuidanceSection};
pub use example::Example;
pub use related::RelatedQuestionRef;
pub use sections::{
    CheckStep, Citation, HowToCheck, Measurement, Quote, StandardsReference, Statistic, Tip,
    WhyItMatters,
};
pub use solution::{ImpactTier, ResourceLevel, Solution};
