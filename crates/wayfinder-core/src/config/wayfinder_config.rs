//! Top-level Wayfinder configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ContentConfig, SearchConfig, SessionConfig};
use crate::constants::{CONFIG_FILE_NAME, MAX_SESSION_DELAY_MS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`WAYFINDER_*`)
/// 3. Project config (`wayfinder.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WayfinderConfig {
    pub session: SessionConfig,
    pub search: SearchConfig,
    pub content: ContentConfig,
}

/// Overrides supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub exit_hold_ms: Option<u64>,
    pub navigation_delay_ms: Option<u64>,
    pub search_max_results: Option<usize>,
    pub content_path: Option<String>,
}

impl WayfinderConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &WayfinderConfig) -> Result<(), ConfigError> {
        for (field, value) in [
            ("session.exit_hold_ms", config.session.exit_hold_ms),
            ("session.navigation_delay_ms", config.session.navigation_delay_ms),
        ] {
            if let Some(ms) = value {
                if ms > MAX_SESSION_DELAY_MS {
                    return Err(ConfigError::ValidationFailed {
                        field: field.to_string(),
                        message: format!("must be at most {MAX_SESSION_DELAY_MS} ms"),
                    });
                }
            }
        }
        if config.search.max_results == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "search.max_results".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut WayfinderConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: WayfinderConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut WayfinderConfig, other: &WayfinderConfig) {
        if other.session.exit_hold_ms.is_some() {
            base.session.exit_hold_ms = other.session.exit_hold_ms;
        }
        if other.session.navigation_delay_ms.is_some() {
            base.session.navigation_delay_ms = other.session.navigation_delay_ms;
        }
        if other.search.max_results.is_some() {
            base.search.max_results = other.search.max_results;
        }
        if other.content.path.is_some() {
            base.content.path = other.content.path.clone();
        }
        if other.content.audit_on_load.is_some() {
            base.content.audit_on_load = other.content.audit_on_load;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `WAYFINDER_EXIT_HOLD_MS`, `WAYFINDER_SEARCH_MAX_RESULTS`, etc.
    fn apply_env_overrides(config: &mut WayfinderConfig) {
        if let Ok(val) = std::env::var("WAYFINDER_EXIT_HOLD_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.session.exit_hold_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WAYFINDER_NAVIGATION_DELAY_MS") {
            if let Ok(v) = val.parse::<u64>() {
                config.session.navigation_delay_ms = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WAYFINDER_SEARCH_MAX_RESULTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.search.max_results = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WAYFINDER_CONTENT_PATH") {
            config.content.path = Some(val);
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut WayfinderConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.exit_hold_ms {
            config.session.exit_hold_ms = Some(v);
        }
        if let Some(v) = overrides.navigation_delay_ms {
            config.session.navigation_delay_ms = Some(v);
        }
        if let Some(v) = overrides.search_max_results {
            config.search.max_results = Some(v);
        }
        if let Some(ref v) = overrides.content_path {
            config.content.path = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
