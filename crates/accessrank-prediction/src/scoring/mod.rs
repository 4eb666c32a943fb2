//! Combined per-item score.
//!
//! ```text
//! score = markov^l × crf^(1/l) × time
//! ```
//!
//! `l` comes from the list stability level; `time` is 1.0 when time
//! weighting is off.

pub mod markov;
pub mod temporal;

pub use markov::markov_weight;
pub use temporal::TemporalProfile;

use accessrank_core::models::{EngineState, ItemVisit, StabilityParams};

/// Each factor of an item's score, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub markov: f64,
    pub crf: f64,
    pub time: f64,
    pub score: f64,
}

/// Everything needed to score candidates against the current item and time.
pub struct ScoringContext<'a> {
    state: &'a EngineState,
    params: StabilityParams,
    temporal: Option<TemporalProfile<'a>>,
}

impl<'a> ScoringContext<'a> {
    pub fn new(state: &'a EngineState, now: ItemVisit) -> Self {
        let temporal = state
            .config
            .use_time_weighting
            .then(|| TemporalProfile::build(&state.items, now));
        Self {
            state,
            params: state.config.list_stability.params(),
            temporal,
        }
    }

    pub fn markov(&self, item: &str) -> f64 {
        markov_weight(&self.state.items, &self.state.most_recent_item_id, item)
    }

    /// Stored CRF weight; it is already decayed as of the item's last visit.
    pub fn crf(&self, item: &str) -> f64 {
        self.state.items.get(item).map_or(0.0, |s| s.crf_weight)
    }

    pub fn time(&self, item: &str) -> f64 {
        self.temporal.as_ref().map_or(1.0, |t| t.weight(item))
    }

    pub fn breakdown(&self, item: &str) -> ScoreBreakdown {
        let l = self.params.blend_exponent;
        let markov = self.markov(item);
        let crf = self.crf(item);
        let time = self.time(item);
        ScoreBreakdown {
            markov,
            crf,
            time,
            score: markov.powf(l) * crf.powf(1.0 / l) * time,
        }
    }

    pub fn score(&self, item: &str) -> f64 {
        self.breakdown(item).score
    }
}
