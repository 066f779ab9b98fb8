use serde::{Deserialize, Serialize};

use super::classification::ModuleCode;

/// By-id link to a topically related entry.
///
/// The target is not guaranteed to exist in the store; resolution happens at
/// navigation time and may come back empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedQuestionRef {
    pub question_id: String,
    pub display_text: String,
    /// Free-form description of the link (e.g. `"prerequisite"`, `"see-also"`).
    #[serde(default)]
    pub relationship: String,
    pub module_code: ModuleCode,
}
