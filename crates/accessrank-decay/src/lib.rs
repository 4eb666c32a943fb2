//! # accessrank-decay
//!
//! Combined recency/frequency (CRF) weighting.
//!
//! ```text
//! crf_new = crf_old × 2^(-rate × (visitNumber − lastVisitNumberForDecay)) + 1
//! ```
//!
//! Elapsed time is measured in visits, not wall-clock time. An item left alone
//! decays toward zero; an item visited on every step converges to
//! `1 / (1 − 2^(−rate))`.

pub mod engine;
pub mod formula;

pub use engine::CrfEngine;
pub use formula::DEFAULT_DECAY_RATE;
