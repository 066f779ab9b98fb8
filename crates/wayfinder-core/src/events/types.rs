//! Event payload types for the analytics callbacks.

use crate::models::GuidanceSection;

/// Payload for `on_open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEvent {
    pub session_id: String,
    pub question_id: String,
}

/// Payload for `on_close`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseEvent {
    pub session_id: String,
    /// Entry that was open when the session closed.
    pub question_id: Option<String>,
}

/// Payload for `on_section_toggle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionToggleEvent {
    pub session_id: String,
    pub question_id: String,
    pub section: GuidanceSection,
    pub expanded: bool,
}

/// Payload for `on_feedback`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEvent {
    pub session_id: String,
    pub question_id: String,
    pub positive: bool,
}

/// Which request asked for content that the store does not have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentRequest {
    Open,
    Navigate,
}

/// Payload for `on_missing_content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingContentEvent {
    pub session_id: String,
    pub question_id: String,
    pub request: ContentRequest,
}
