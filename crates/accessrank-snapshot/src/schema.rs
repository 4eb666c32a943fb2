//! Snapshot wire format, version 1.
//!
//! Every field is required and unknown fields are rejected. `rank` must be
//! present but may be `null` (never ranked).

use std::collections::BTreeMap;

use accessrank_core::models::ListStability;
use serde::{Deserialize, Deserializer, Serialize};

/// Version written by [`crate::encode`] and the only one accepted by [`crate::decode`].
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SnapshotV1 {
    pub version: u32,
    pub configuration: ConfigurationV1,
    pub items: BTreeMap<String, ItemStateV1>,
    pub prediction_list: Vec<ScoredItemV1>,
    /// Prediction list ids, oldest admission first.
    pub admission_order: Vec<String>,
    pub visit_number: u64,
    #[serde(rename = "mostRecentItemID")]
    pub most_recent_item_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigurationV1 {
    pub list_stability: ListStability,
    pub use_time_weighting: bool,
    pub max_visits: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ItemStateV1 {
    pub next_visits: BTreeMap<String, Vec<ItemVisitV1>>,
    pub number_of_visits: u64,
    pub time_of_last_visit: f64,
    pub crf_weight: f64,
    pub last_visit_number_for_decay: u64,
    #[serde(deserialize_with = "required_nullable")]
    pub rank: Option<u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemVisitV1 {
    pub hour: u32,
    pub weekday: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoredItemV1 {
    pub id: String,
    pub score: f64,
}

// A custom deserializer turns off serde's "missing Option means None" rule,
// so an absent `rank` is an error while an explicit `null` is accepted.
fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
