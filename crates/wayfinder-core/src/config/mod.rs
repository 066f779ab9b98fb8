//! Configuration system for Wayfinder.
//! TOML-based, layered: overrides > env > project file > defaults.

pub mod content_config;
pub mod search_config;
pub mod session_config;
pub mod wayfinder_config;

pub use content_config::ContentConfig;
pub use search_config::SearchConfig;
pub use session_config::SessionConfig;
pub use wayfinder_config::{ConfigOverrides, WayfinderConfig};
