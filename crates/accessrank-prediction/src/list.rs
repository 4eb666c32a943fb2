//! Prediction list maintenance: rescore, stability-aware sort, re-rank,
//! admit, notify.

use std::collections::HashMap;

use accessrank_core::constants::{SENTINEL_ITEM_ID, UNRANKED};
use accessrank_core::models::{ItemState, ScoredItem};
use accessrank_observability::update_span;
use tracing::trace;

use crate::engine::AccessRank;

impl AccessRank {
    pub(crate) fn update_prediction_list(&mut self) {
        let _span = update_span!(self.state.prediction_list.len()).entered();

        self.rescore();
        let bonus = self.state.config.list_stability.params().stability_bonus;
        sort_with_stability(&mut self.state.prediction_list, &self.state.items, bonus);
        self.update_ranks();
        self.admit_current_item();
        self.notify_observer();
    }

    fn rescore(&mut self) {
        let scores: Vec<f64> = {
            let context = self.scoring_context();
            self.state
                .prediction_list
                .iter()
                .map(|scored| {
                    let score = context.score(&scored.id);
                    trace!(item = %scored.id, score, "rescored");
                    score
                })
                .collect()
        };
        for (scored, score) in self.state.prediction_list.iter_mut().zip(scores) {
            scored.score = score;
        }
    }

    fn update_ranks(&mut self) {
        for (index, scored) in self.state.prediction_list.iter().enumerate() {
            if let Some(record) = self.state.items.get_mut(&scored.id) {
                record.rank = index;
            }
        }
    }

    /// Append the current item on its first visit, then cap the list at
    /// `max_visits` by evicting the earliest admitted entries.
    fn admit_current_item(&mut self) {
        let current = self.state.most_recent_item_id.as_str();
        if current == SENTINEL_ITEM_ID || self.state.list_contains(current) {
            return;
        }
        let first_visit = self
            .state
            .items
            .get(current)
            .is_some_and(|record| record.number_of_visits == 1);
        if !first_visit {
            return;
        }
        let id = current.to_string();
        self.state.prediction_list.push(ScoredItem::new(id.clone(), 0.0));
        self.state.admission_order.push_back(id);

        let max_visits = self.state.config.max_visits;
        while self.state.prediction_list.len() > max_visits {
            let Some(oldest) = self.state.admission_order.pop_front() else {
                break;
            };
            self.state.prediction_list.retain(|scored| scored.id != oldest);
            trace!(item = %oldest, "evicted from prediction list");
            if let Some(record) = self.state.items.get_mut(&oldest) {
                record.rank = UNRANKED;
            }
        }
    }

    fn notify_observer(&mut self) {
        let Some(weak) = self.observer.as_ref() else {
            return;
        };
        match weak.upgrade() {
            Some(observer) => observer.did_update_predictions(self),
            None => self.observer = None,
        }
    }
}

/// Stable insertion sort under the stability-aware ordering.
///
/// The ordering is pairwise and not transitive, so a general-purpose sort
/// is not usable here.
pub(crate) fn sort_with_stability(
    list: &mut [ScoredItem],
    items: &HashMap<String, ItemState>,
    bonus: f64,
) {
    for i in 1..list.len() {
        let mut j = i;
        while j > 0 && precedes(&list[j], &list[j - 1], items, bonus) {
            list.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Whether `a` belongs before `b`.
///
/// The previously better-ranked item of the pair gets `bonus` added when the
/// other one overtakes it. Remaining ties go to the more recent visit.
fn precedes(a: &ScoredItem, b: &ScoredItem, items: &HashMap<String, ItemState>, bonus: f64) -> bool {
    let (rank_a, last_a) = rank_and_last_visit(items, &a.id);
    let (rank_b, last_b) = rank_and_last_visit(items, &b.id);
    let mut score_a = a.score;
    let mut score_b = b.score;

    if rank_a < rank_b && score_b > score_a {
        score_a += bonus;
    } else if rank_a > rank_b && score_b < score_a {
        score_b += bonus;
    }

    if score_a == score_b {
        last_a > last_b
    } else {
        score_a > score_b
    }
}

fn rank_and_last_visit(items: &HashMap<String, ItemState>, id: &str) -> (usize, f64) {
    items
        .get(id)
        .map_or((UNRANKED, 0.0), |record| (record.rank, record.time_of_last_visit))
}
