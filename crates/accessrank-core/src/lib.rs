//! # accessrank-core
//!
//! Foundation crate for the AccessRank prediction engine.
//! Defines the item models, config, errors, constants, and the time-source trait.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AccessRankConfig, ObservabilityConfig, PredictionConfig};
pub use errors::{AccessRankError, AccessRankResult, ConfigError, SnapshotError};
pub use models::{EngineState, ItemState, ItemVisit, ListStability, ScoredItem, StabilityParams};
pub use traits::{IClock, ManualClock, SystemClock};
