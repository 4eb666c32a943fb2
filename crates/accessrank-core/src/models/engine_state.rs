use std::collections::{HashMap, VecDeque};

use super::{ItemState, ScoredItem};
use crate::config::PredictionConfig;
use crate::constants::SENTINEL_ITEM_ID;

/// Complete engine state: everything a snapshot captures.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub config: PredictionConfig,
    /// One record per item ever visited or transitioned from.
    pub items: HashMap<String, ItemState>,
    /// Unique by id, ordered by last computed rank.
    pub prediction_list: Vec<ScoredItem>,
    /// Ids of `prediction_list` in the order they were admitted, oldest first.
    pub admission_order: VecDeque<String>,
    /// Logical clock, saturating at `config.max_visits`.
    pub visit_number: u64,
    /// Current item, or [`SENTINEL_ITEM_ID`] when there is none.
    pub most_recent_item_id: String,
}

impl EngineState {
    /// Fresh state with no history.
    pub fn new(config: PredictionConfig) -> Self {
        Self {
            config,
            items: HashMap::new(),
            prediction_list: Vec::new(),
            admission_order: VecDeque::new(),
            visit_number: 0,
            most_recent_item_id: SENTINEL_ITEM_ID.to_string(),
        }
    }

    /// Current item, or `None` when cleared.
    pub fn most_recent_item(&self) -> Option<&str> {
        if self.most_recent_item_id == SENTINEL_ITEM_ID {
            None
        } else {
            Some(self.most_recent_item_id.as_str())
        }
    }

    /// Record for `id`, created empty on first reference.
    pub fn item_mut(&mut self, id: &str) -> &mut ItemState {
        self.items.entry(id.to_string()).or_default()
    }

    pub fn list_contains(&self, id: &str) -> bool {
        self.prediction_list.iter().any(|s| s.id == id)
    }
}
