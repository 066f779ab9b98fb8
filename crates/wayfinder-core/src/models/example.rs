use serde::{Deserialize, Serialize};

use super::classification::AudienceTag;

/// A worked example tagged with the audience it speaks to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub audience: AudienceTag,
    #[serde(default)]
    pub title: Option<String>,
    pub scenario: String,
    pub solution: String,
    pub outcome: String,
    #[serde(default)]
    pub cost: Option<String>,
    #[serde(default)]
    pub time_frame: Option<String>,
}
