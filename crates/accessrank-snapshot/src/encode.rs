use accessrank_core::constants::UNRANKED;
use accessrank_core::errors::SnapshotError;
use accessrank_core::models::{EngineState, ItemState};
use serde_json::Value;

use crate::schema::{
    ConfigurationV1, ItemStateV1, ItemVisitV1, ScoredItemV1, SnapshotV1, SNAPSHOT_VERSION,
};

/// Encode engine state as a version 1 snapshot value.
pub fn encode(state: &EngineState) -> Result<Value, SnapshotError> {
    serde_json::to_value(to_schema(state)).map_err(|e| SnapshotError::Encode {
        message: e.to_string(),
    })
}

/// Encode engine state as pretty-printed JSON.
pub fn encode_to_string(state: &EngineState) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(&to_schema(state)).map_err(|e| SnapshotError::Encode {
        message: e.to_string(),
    })
}

fn to_schema(state: &EngineState) -> SnapshotV1 {
    SnapshotV1 {
        version: SNAPSHOT_VERSION,
        configuration: ConfigurationV1 {
            list_stability: state.config.list_stability,
            use_time_weighting: state.config.use_time_weighting,
            max_visits: state.config.max_visits as u64,
        },
        items: state
            .items
            .iter()
            .map(|(id, item)| (id.clone(), item_to_schema(item)))
            .collect(),
        prediction_list: state
            .prediction_list
            .iter()
            .map(|scored| ScoredItemV1 {
                id: scored.id.clone(),
                score: scored.score,
            })
            .collect(),
        admission_order: state.admission_order.iter().cloned().collect(),
        visit_number: state.visit_number,
        most_recent_item_id: state.most_recent_item_id.clone(),
    }
}

fn item_to_schema(item: &ItemState) -> ItemStateV1 {
    ItemStateV1 {
        next_visits: item
            .next_visits
            .iter()
            .map(|(id, visits)| {
                let visits = visits
                    .iter()
                    .map(|v| ItemVisitV1 {
                        hour: v.hour,
                        weekday: v.weekday,
                    })
                    .collect();
                (id.clone(), visits)
            })
            .collect(),
        number_of_visits: item.number_of_visits,
        time_of_last_visit: item.time_of_last_visit,
        crf_weight: item.crf_weight,
        last_visit_number_for_decay: item.last_visit_number_for_decay,
        rank: (item.rank != UNRANKED).then_some(item.rank as u64),
    }
}
