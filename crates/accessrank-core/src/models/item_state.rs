use std::collections::BTreeMap;

use super::ItemVisit;
use crate::constants::UNRANKED;

/// Per-item history and decayed statistics.
///
/// `next_visits` holds the transitions observed FROM this item, keyed by the
/// destination id, each list ordered oldest to newest.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemState {
    pub next_visits: BTreeMap<String, Vec<ItemVisit>>,
    /// Times this item became the current item.
    pub number_of_visits: u64,
    /// Seconds since the Unix epoch of the last visit.
    pub time_of_last_visit: f64,
    /// Recency/frequency accumulator, decayed by elapsed visit count.
    pub crf_weight: f64,
    /// Visit number at which `crf_weight` was last updated.
    pub last_visit_number_for_decay: u64,
    /// Last index in the prediction list, or [`UNRANKED`].
    pub rank: usize,
}

impl ItemState {
    pub fn new() -> Self {
        Self {
            next_visits: BTreeMap::new(),
            number_of_visits: 0,
            time_of_last_visit: 0.0,
            crf_weight: 0.0,
            last_visit_number_for_decay: 0,
            rank: UNRANKED,
        }
    }

    /// Append a transition to `to`, keeping only the newest `max_visits` entries.
    pub fn record_transition(&mut self, to: &str, visit: ItemVisit, max_visits: usize) {
        let visits = self.next_visits.entry(to.to_string()).or_default();
        visits.push(visit);
        if visits.len() > max_visits {
            let excess = visits.len() - max_visits;
            visits.drain(..excess);
        }
    }

    /// Drop all transitions to `to`. Returns whether any were present.
    pub fn remove_transitions_to(&mut self, to: &str) -> bool {
        self.next_visits.remove(to).is_some()
    }

    /// Number of recorded transitions from this item to `to`.
    pub fn transitions_to(&self, to: &str) -> usize {
        self.next_visits.get(to).map_or(0, Vec::len)
    }

    /// `dst (count), dst (count), ...` for every outgoing transition.
    pub fn markov_description(&self) -> String {
        self.next_visits
            .iter()
            .map(|(id, visits)| format!("{id} ({})", visits.len()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for ItemState {
    fn default() -> Self {
        Self::new()
    }
}
