//! Presentation payload sections of a guidance entry.

use serde::{Deserialize, Serialize};

/// Why the audit question matters to visitors and to the business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhyItMatters {
    pub text: String,
    #[serde(default)]
    pub statistic: Option<Statistic>,
    #[serde(default)]
    pub quote: Option<Quote>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistic {
    pub value: String,
    pub context: String,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub text: String,
    #[serde(default)]
    pub attribution: Option<String>,
}

/// A practical tip. Lower `priority` ranks first when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    pub text: String,
    #[serde(default)]
    pub priority: Option<u8>,
    /// Expandable detail shown on demand.
    #[serde(default)]
    pub detail: Option<String>,
}

/// Ordered verification steps for checking the question on site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowToCheck {
    pub steps: Vec<CheckStep>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub time_estimate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStep {
    pub text: String,
    #[serde(default)]
    pub measurement: Option<Measurement>,
}

/// What to measure, what counts as acceptable, and in which unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub target: String,
    pub acceptable_value: String,
    pub unit: String,
}

/// Standards citation with a plain-language gloss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardsReference {
    pub primary: Citation,
    #[serde(default)]
    pub related: Vec<Citation>,
    pub plain_language: String,
    #[serde(default)]
    pub compliance_note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Clause identifier, e.g. `"AS 1428.1 Clause 11"`.
    pub code: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
