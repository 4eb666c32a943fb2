//! # accessrank-prediction
//!
//! The AccessRank engine. Each visit updates the transition history and
//! the visited item's recency/frequency weight. Then the prediction list is
//! rescored, re-sorted with rank hysteresis and re-ranked, and the observer
//! is told.
//!
//! ```no_run
//! use accessrank_core::config::PredictionConfig;
//! use accessrank_prediction::AccessRank;
//!
//! # fn main() -> Result<(), accessrank_core::errors::ConfigError> {
//! let mut engine = AccessRank::new(PredictionConfig::default())?;
//! engine.visit("inbox");
//! engine.visit("drafts");
//! assert_eq!(engine.predictions(), ["inbox"]);
//! # Ok(())
//! # }
//! ```

mod describe;
pub mod engine;
mod list;
pub mod observer;
mod recorder;
mod removal;
pub mod scoring;

pub use engine::AccessRank;
pub use observer::IPredictionObserver;
pub use scoring::{markov_weight, ScoreBreakdown, ScoringContext, TemporalProfile};
