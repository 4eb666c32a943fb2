use std::collections::HashMap;

use accessrank_core::models::ItemState;

/// Laplace-smoothed probability of moving from `current` to `item`.
///
/// Formula: `(transitions(current → item) + 1) / (visits(current) + 1)`.
/// An unknown current item counts as zero transitions and zero visits.
pub fn markov_weight(items: &HashMap<String, ItemState>, current: &str, item: &str) -> f64 {
    let (transitions, visits) = items
        .get(current)
        .map_or((0, 0), |state| (state.transitions_to(item), state.number_of_visits));
    (transitions as f64 + 1.0) / (visits as f64 + 1.0)
}
