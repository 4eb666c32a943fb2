use accessrank_core::models::ItemState;

use crate::formula::{self, DEFAULT_DECAY_RATE};

/// Applies CRF decay to item records.
#[derive(Debug, Clone, Copy)]
pub struct CrfEngine {
    rate: f64,
}

impl CrfEngine {
    /// Engine with the default rate of 0.1 per visit.
    pub fn new() -> Self {
        Self {
            rate: DEFAULT_DECAY_RATE,
        }
    }

    /// Record that `state` became the current item at `visit_number`.
    ///
    /// Bumps the visit count, stamps the visit time, and decays-then-increments
    /// the CRF weight.
    pub fn register_visit(&self, state: &mut ItemState, visit_number: u64, at_epoch_secs: f64) {
        let elapsed = visit_number.saturating_sub(state.last_visit_number_for_decay);
        state.number_of_visits += 1;
        state.time_of_last_visit = at_epoch_secs;
        state.crf_weight = formula::accumulate(state.crf_weight, self.rate, elapsed);
        state.last_visit_number_for_decay = visit_number;
    }
}

impl Default for CrfEngine {
    fn default() -> Self {
        Self::new()
    }
}
