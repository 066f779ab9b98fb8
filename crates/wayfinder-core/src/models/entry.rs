use serde::{Deserialize, Serialize};

use super::classification::{Category, ModuleCode, ModuleGroup};
use super::example::Example;
use super::related::RelatedQuestionRef;
use super::sections::{HowToCheck, StandardsReference, Tip, WhyItMatters};
use super::solution::Solution;

/// One unit of structured help content, keyed by its audit question id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceEntry {
    /// Unique within a content store.
    pub question_id: String,
    pub module_code: ModuleCode,
    pub module_group: ModuleGroup,
    pub category: Category,

    pub title: String,
    /// Always shown, regardless of which sections are expanded.
    pub summary: String,
    pub why_it_matters: WhyItMatters,
    #[serde(default)]
    pub tips: Vec<Tip>,
    #[serde(default)]
    pub how_to_check: Option<HowToCheck>,
    #[serde(default)]
    pub standards_reference: Option<StandardsReference>,
    #[serde(default)]
    pub examples: Vec<Example>,
    #[serde(default)]
    pub solutions: Vec<Solution>,
    #[serde(default)]
    pub related_questions: Vec<RelatedQuestionRef>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Freshness marker. Opaque; never parsed.
    #[serde(default)]
    pub last_updated: String,
}

impl GuidanceEntry {
    /// Whether the entry carries content for `section`.
    pub fn has_section(&self, section: GuidanceSection) -> bool {
        match section {
            GuidanceSection::WhyItMatters => true,
            GuidanceSection::Tips => !self.tips.is_empty(),
            GuidanceSection::HowToCheck => self.how_to_check.is_some(),
            GuidanceSection::Standards => self.standards_reference.is_some(),
            GuidanceSection::Examples => !self.examples.is_empty(),
            GuidanceSection::Solutions => !self.solutions.is_empty(),
            GuidanceSection::RelatedQuestions => !self.related_questions.is_empty(),
        }
    }

    /// Sections present on this entry, in display order.
    pub fn sections(&self) -> Vec<GuidanceSection> {
        GuidanceSection::ALL
            .into_iter()
            .filter(|s| self.has_section(*s))
            .collect()
    }

    /// Tips ordered by priority rank; unranked tips keep their relative
    /// order after the ranked ones.
    pub fn tips_by_priority(&self) -> Vec<&Tip> {
        let mut tips: Vec<&Tip> = self.tips.iter().collect();
        tips.sort_by_key(|t| t.priority.unwrap_or(u8::MAX));
        tips
    }
}

/// Expandable section of a guidance entry. The summary is not a section:
/// it is always shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuidanceSection {
    WhyItMatters,
    Tips,
    HowToCheck,
    Standards,
    Examples,
    Solutions,
    RelatedQuestions,
}

impl GuidanceSection {
    pub const ALL: [GuidanceSection; 7] = [
        Self::WhyItMatters,
        Self::Tips,
        Self::HowToCheck,
        Self::Standards,
        Self::Examples,
        Self::Solutions,
        Self::RelatedQuestions,
    ];

    /// Name reported to analytics sinks.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WhyItMatters => "why-it-matters",
            Self::Tips => "tips",
            Self::HowToCheck => "how-to-check",
            Self::Standards => "standards",
            Self::Examples => "examples",
            Self::Solutions => "solutions",
            Self::RelatedQuestions => "related-questions",
        }
    }
}

impl std::fmt::Display for GuidanceSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
