use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::ListStability;

/// Prediction engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// How strongly the list resists reordering on small score changes.
    pub list_stability: ListStability,
    /// Scale scores by the hour-of-day / day-of-week ratio.
    pub use_time_weighting: bool,
    /// Ceiling for the visit counter, per-transition history, and list length.
    pub max_visits: usize,
}

impl PredictionConfig {
    /// Config with the given stability and every other field at its default.
    pub fn with_stability(list_stability: ListStability) -> Self {
        Self {
            list_stability,
            ..Self::default()
        }
    }

    /// `max_visits` must be at least 1.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_visits == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "max_visits".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            list_stability: defaults::DEFAULT_LIST_STABILITY,
            use_time_weighting: defaults::DEFAULT_USE_TIME_WEIGHTING,
            max_visits: defaults::DEFAULT_MAX_VISITS,
        }
    }
}
