//! Top-level murmur configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ConsolidationConfig, FilterConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Largest UTC offset chrono accepts, in minutes (exclusive bound).
const MAX_OFFSET_MINUTES: i32 = 24 * 60;

/// Top-level configuration aggregating all sub-configs.
///
/// Loaded once by the caller and handed to the engine explicitly; nothing in
/// the pipeline reads configuration from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MurmurConfig {
    pub filters: FilterConfig,
    pub consolidation: ConsolidationConfig,
    pub observability: ObservabilityConfig,
}

impl MurmurConfig {
    /// Load a TOML file, apply `MURMUR_*` environment overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let mut config: MurmurConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::apply_overrides(&mut config, |key| std::env::var(key).ok());
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: MurmurConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Apply overrides looked up through `lookup` (the environment in `load`).
    /// Unparseable values are ignored.
    pub fn apply_overrides<F>(config: &mut MurmurConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("MURMUR_BURST_WINDOW_MS") {
            if let Ok(v) = val.parse::<u64>() {
                debug!(burst_window_ms = v, "config override from environment");
                config.consolidation.burst_window_ms = v;
            }
        }
        if let Some(val) = lookup("MURMUR_NEAR_DUPLICATE_TOLERANCE") {
            if let Ok(v) = val.parse::<f64>() {
                debug!(tolerance = v, "config override from environment");
                config.consolidation.near_duplicate_tolerance = v;
            }
        }
        if let Some(val) = lookup("MURMUR_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(config: &MurmurConfig) -> Result<(), ConfigError> {
        let tolerance = config.consolidation.near_duplicate_tolerance;
        if !(0.0..=1.0).contains(&tolerance) {
            return Err(ConfigError::ValidationFailed {
                field: "consolidation.near_duplicate_tolerance".to_string(),
                message: "must be between 0.0 and 1.0".to_string(),
            });
        }
        if config.consolidation.max_near_duplicate_batch == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "consolidation.max_near_duplicate_batch".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(minutes) = config.consolidation.burst_display_offset_minutes {
            if minutes.abs() >= MAX_OFFSET_MINUTES {
                return Err(ConfigError::ValidationFailed {
                    field: "consolidation.burst_display_offset_minutes".to_string(),
                    message: "must be within ±24 hours".to_string(),
                });
            }
        }
        Ok(())
    }
}
