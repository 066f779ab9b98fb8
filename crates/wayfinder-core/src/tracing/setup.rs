//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Initialize the Wayfinder tracing/logging system.
///
/// Reads the `WAYFINDER_LOG` environment variable for per-crate log levels.
/// Format: `WAYFINDER_LOG=wayfinder_session=debug,wayfinder_content=warn`
///
/// Falls back to `wayfinder=info` if `WAYFINDER_LOG` is not set or is invalid.
/// Idempotent; a subscriber installed by the host application wins.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("WAYFINDER_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
