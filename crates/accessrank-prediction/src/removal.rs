use accessrank_core::constants::SENTINEL_ITEM_ID;
use accessrank_observability::removal_span;
use tracing::debug;

use crate::engine::AccessRank;

impl AccessRank {
    /// Purge items from all history and from the prediction list.
    ///
    /// Unknown ids and the sentinel are ignored. If the current item is
    /// removed, the current item is cleared. One list update always follows.
    pub fn remove_items<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .filter(|id| id != SENTINEL_ITEM_ID)
            .collect();
        let _span = removal_span!(ids.len()).entered();

        for id in &ids {
            self.remove_item(id);
        }
        if ids.contains(&self.state.most_recent_item_id) {
            self.clear_current_item();
        }

        self.update_prediction_list();
    }

    fn remove_item(&mut self, id: &str) {
        let known = self.state.items.remove(id).is_some();
        let scrubbed = self
            .state
            .items
            .values_mut()
            .map(|record| record.remove_transitions_to(id))
            .filter(|&removed| removed)
            .count();
        self.state.prediction_list.retain(|scored| scored.id != id);
        self.state.admission_order.retain(|admitted| admitted != id);
        debug!(item = id, known, scrubbed, "removed item");
    }
}
