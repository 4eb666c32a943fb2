//! Configuration with file, environment, and compiled-default layers.

pub mod defaults;
pub mod observability_config;
pub mod prediction_config;

pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::ListStability;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ACCESSRANK_*`)
/// 2. TOML file passed to [`AccessRankConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessRankConfig {
    pub prediction: PredictionConfig,
    pub observability: ObservabilityConfig,
}

impl AccessRankConfig {
    /// Load from a TOML file, then apply environment overrides and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `ACCESSRANK_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Keys use the
    /// `ACCESSRANK_*` environment names.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("ACCESSRANK_LIST_STABILITY") {
            self.prediction.list_stability =
                value
                    .parse::<ListStability>()
                    .map_err(|message| ConfigError::InvalidValue {
                        field: "prediction.list_stability".to_string(),
                        message,
                    })?;
        }
        if let Some(value) = lookup("ACCESSRANK_USE_TIME_WEIGHTING") {
            self.prediction.use_time_weighting =
                value.parse::<bool>().map_err(|e| ConfigError::InvalidValue {
                    field: "prediction.use_time_weighting".to_string(),
                    message: e.to_string(),
                })?;
        }
        if let Some(value) = lookup("ACCESSRANK_MAX_VISITS") {
            self.prediction.max_visits =
                value.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                    field: "prediction.max_visits".to_string(),
                    message: e.to_string(),
                })?;
        }
        if let Some(value) = lookup("ACCESSRANK_LOG_LEVEL") {
            self.observability.log_level = value;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.prediction.validate().map_err(|e| match e {
            ConfigError::ValidationFailed { field, message } => ConfigError::ValidationFailed {
                field: format!("prediction.{field}"),
                message,
            },
            other => other,
        })
    }
}
