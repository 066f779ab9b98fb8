use std::time::Duration;

/// How long closed content stays readable after a session closes, so an
/// exit transition can still render it.
pub const EXIT_HOLD_DELAY: Duration = Duration::from_millis(DEFAULT_EXIT_HOLD_MS);

/// Pause between closing the current entry and opening the next one during
/// related-question navigation.
pub const NAVIGATION_DELAY: Duration = Duration::from_millis(DEFAULT_NAVIGATION_DELAY_MS);

pub const DEFAULT_EXIT_HOLD_MS: u64 = 300;
pub const DEFAULT_NAVIGATION_DELAY_MS: u64 = 150;

/// Upper bound accepted for either session delay.
pub const MAX_SESSION_DELAY_MS: u64 = 10_000;

/// Catch-all audience tag: examples carrying it are relevant to everyone.
pub const GENERAL_AUDIENCE_TAG: &str = "general";

/// Default tracing filter when `WAYFINDER_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "wayfinder=info";

/// Project-level config file name.
pub const CONFIG_FILE_NAME: &str = "wayfinder.toml";
