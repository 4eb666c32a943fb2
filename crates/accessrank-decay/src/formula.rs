/// Decay rate per elapsed visit (half-life of 10 visits).
pub const DEFAULT_DECAY_RATE: f64 = 0.1;

/// Retention factor after `elapsed_visits`: `2^(-rate × elapsed)`.
///
/// Range: (0.0, 1.0]. Zero elapsed visits retain everything.
#[inline]
pub fn decay_factor(rate: f64, elapsed_visits: u64) -> f64 {
    (-rate * elapsed_visits as f64).exp2()
}

/// Weight left after decaying `weight` for `elapsed_visits`.
#[inline]
pub fn decayed(weight: f64, rate: f64, elapsed_visits: u64) -> f64 {
    weight * decay_factor(rate, elapsed_visits)
}

/// Decay then add 1 for the visit being recorded.
#[inline]
pub fn accumulate(weight: f64, rate: f64, elapsed_visits: u64) -> f64 {
    decayed(weight, rate, elapsed_visits) + 1.0
}

