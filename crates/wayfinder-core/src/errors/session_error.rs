//! Session controller errors.

use super::error_code::{self, WayfinderErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no Tokio runtime available to schedule session timers")]
    NoRuntime,
}

impl WayfinderErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        error_code::SESSION_ERROR
    }
}
