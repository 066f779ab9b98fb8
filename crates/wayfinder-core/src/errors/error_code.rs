//! WayfinderErrorCode trait for the presentation boundary.

/// Stable machine-readable code for every error enum, so the presentation
/// layer can branch without parsing messages.
pub trait WayfinderErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONTENT_ERROR: &str = "CONTENT_ERROR";
pub const DUPLICATE_ID: &str = "DUPLICATE_ID";
pub const SESSION_ERROR: &str = "SESSION_ERROR";
