use serde::{Deserialize, Serialize};

/// How much a business has to invest to carry out a solution.
///
/// Ordered from cheapest to most demanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceLevel {
    Low,
    Medium,
    High,
}

impl ResourceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Expected effect of a solution on visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImpactTier {
    QuickWin,
    Moderate,
    Significant,
}

/// A graded remediation option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub title: String,
    pub description: String,
    pub resource_level: ResourceLevel,
    /// Display string, e.g. `"$0-$500"`.
    pub cost_range: String,
    pub effort: String,
    /// Who usually carries it out (owner, staff, contractor...).
    pub responsible: String,
    pub impact: ImpactTier,
    #[serde(default)]
    pub steps: Vec<String>,
}
