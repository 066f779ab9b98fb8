//! Error handling for Wayfinder.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! Missing content and dangling cross-references are expected outcomes, not
//! errors; they never surface through these types.

pub mod config_error;
pub mod content_error;
pub mod error_code;
pub mod session_error;

pub use config_error::ConfigError;
pub use content_error::{ContentError, ContentResult};
pub use error_code::WayfinderErrorCode;
pub use session_error::SessionError;
