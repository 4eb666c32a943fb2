// Single source of truth for all default values.

use crate::models::ListStability;

// --- Prediction ---
pub const DEFAULT_LIST_STABILITY: ListStability = ListStability::Medium;
pub const DEFAULT_USE_TIME_WEIGHTING: bool = true;
pub const DEFAULT_MAX_VISITS: usize = 1_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
