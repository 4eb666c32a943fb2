use accessrank_core::constants::SENTINEL_ITEM_ID;
use accessrank_core::models::ItemVisit;
use accessrank_core::traits::clock::epoch_seconds;
use accessrank_observability::visit_span;
use tracing::debug;

use crate::engine::AccessRank;

impl AccessRank {
    /// Record an access to `item`, or clear the current item when `None`.
    ///
    /// Passing the sentinel id is the same as passing `None`.
    pub fn visit_item(&mut self, item: Option<&str>) {
        match item {
            Some(id) if id != SENTINEL_ITEM_ID => self.visit(id),
            _ => self.clear_current_item(),
        }
    }

    /// Record an access to `item` and refresh the prediction list.
    pub fn visit(&mut self, item: &str) {
        if item == SENTINEL_ITEM_ID {
            self.clear_current_item();
            return;
        }
        let _span = visit_span!(item).entered();

        let max_visits = self.state.config.max_visits;
        let ceiling = u64::try_from(max_visits).unwrap_or(u64::MAX);
        self.state.visit_number = self.state.visit_number.saturating_add(1).min(ceiling);
        let visit_number = self.state.visit_number;

        let now = self.clock.now();
        let previous = std::mem::replace(&mut self.state.most_recent_item_id, item.to_string());
        self.state
            .item_mut(&previous)
            .record_transition(item, ItemVisit::at(&now), max_visits);

        let crf = self.crf;
        let record = self.state.item_mut(item);
        crf.register_visit(record, visit_number, epoch_seconds(&now));
        debug!(
            from = %previous,
            visit_number,
            visits = record.number_of_visits,
            crf_weight = record.crf_weight,
            "recorded visit"
        );

        self.update_prediction_list();
    }

    /// Drop the current item pointer. No transition is recorded and the
    /// list is left untouched.
    pub fn clear_current_item(&mut self) {
        if self.state.most_recent_item_id != SENTINEL_ITEM_ID {
            debug!(previous = %self.state.most_recent_item_id, "cleared current item");
        }
        self.state.most_recent_item_id = SENTINEL_ITEM_ID.to_string();
    }
}
