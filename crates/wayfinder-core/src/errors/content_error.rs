//! Content store construction errors.

use super::error_code::{self, WayfinderErrorCode};

/// Integrity and loading failures while building a content store.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("duplicate question id {question_id:?}: entries {first_index} and {duplicate_index}")]
    DuplicateQuestionId {
        question_id: String,
        first_index: usize,
        duplicate_index: usize,
    },

    #[error("entry {index} has an empty question id")]
    EmptyQuestionId { index: usize },

    #[error("content file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to read content file {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("content parse error in {source_name}: {message}")]
    ParseError {
        source_name: String,
        message: String,
    },
}

impl WayfinderErrorCode for ContentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateQuestionId { .. } => error_code::DUPLICATE_ID,
            _ => error_code::CONTENT_ERROR,
        }
    }
}

pub type ContentResult<T> = Result<T, ContentError>;
