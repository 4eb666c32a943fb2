use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use accessrank_core::config::PredictionConfig;
use accessrank_core::constants::{SENTINEL_ITEM_ID, UNRANKED};
use accessrank_core::errors::SnapshotError;
use accessrank_core::models::{EngineState, ItemState, ItemVisit, ScoredItem};
use serde::Deserialize;
use serde_json::Value;

use crate::schema::{ItemStateV1, ItemVisitV1, SnapshotV1, SNAPSHOT_VERSION};

/// Decode a snapshot value into engine state.
///
/// Checks, in order: the value is an object, `version` is present and
/// supported, every field is present and well-typed, field values are in
/// range, and the cross-references between list, items, and current item hold.
pub fn decode(value: &Value) -> Result<EngineState, SnapshotError> {
    let object = value.as_object().ok_or_else(|| SnapshotError::Malformed {
        message: format!("expected a JSON object, found {}", json_kind(value)),
    })?;

    let version = object.get("version").ok_or(SnapshotError::MissingVersion)?;
    if version.as_u64() != Some(u64::from(SNAPSHOT_VERSION)) {
        return Err(SnapshotError::UnsupportedVersion {
            found: version.to_string(),
            supported: SNAPSHOT_VERSION,
        });
    }

    let snapshot = SnapshotV1::deserialize(value).map_err(|e| SnapshotError::Malformed {
        message: e.to_string(),
    })?;

    from_schema(snapshot)
}

/// Decode an optional snapshot. `None` and JSON `null` mean "no snapshot yet".
pub fn decode_optional(value: Option<&Value>) -> Result<Option<EngineState>, SnapshotError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode(value).map(Some),
    }
}

/// Parse JSON text and decode it.
pub fn decode_from_str(json: &str) -> Result<EngineState, SnapshotError> {
    let value: Value = serde_json::from_str(json).map_err(|e| SnapshotError::Malformed {
        message: e.to_string(),
    })?;
    decode(&value)
}

fn from_schema(snapshot: SnapshotV1) -> Result<EngineState, SnapshotError> {
    let max_visits = usize::try_from(snapshot.configuration.max_visits)
        .ok()
        .filter(|&max| max > 0)
        .ok_or_else(|| SnapshotError::InvalidValue {
            field: "configuration.maxVisits".to_string(),
            message: format!(
                "must be a positive count, got {}",
                snapshot.configuration.max_visits
            ),
        })?;
    let config = PredictionConfig {
        list_stability: snapshot.configuration.list_stability,
        use_time_weighting: snapshot.configuration.use_time_weighting,
        max_visits,
    };

    let mut items = HashMap::with_capacity(snapshot.items.len());
    for (id, item) in snapshot.items {
        let state = item_from_schema(&id, item)?;
        items.insert(id, state);
    }

    let mut seen = HashSet::new();
    let mut prediction_list = Vec::with_capacity(snapshot.prediction_list.len());
    for scored in snapshot.prediction_list {
        if scored.id == SENTINEL_ITEM_ID {
            return Err(SnapshotError::Inconsistent {
                reason: "prediction list contains the sentinel item".to_string(),
            });
        }
        if !items.contains_key(&scored.id) {
            return Err(SnapshotError::Inconsistent {
                reason: format!("prediction list references unknown item '{}'", scored.id),
            });
        }
        if !seen.insert(scored.id.clone()) {
            return Err(SnapshotError::Inconsistent {
                reason: format!("prediction list contains '{}' twice", scored.id),
            });
        }
        ensure_finite(&format!("predictionList.{}.score", scored.id), scored.score)?;
        prediction_list.push(ScoredItem::new(scored.id, scored.score));
    }

    let admission_order = admission_order_from_schema(snapshot.admission_order, &seen)?;

    if snapshot.most_recent_item_id != SENTINEL_ITEM_ID
        && !items.contains_key(&snapshot.most_recent_item_id)
    {
        return Err(SnapshotError::Inconsistent {
            reason: format!(
                "current item '{}' has no item record",
                snapshot.most_recent_item_id
            ),
        });
    }

    Ok(EngineState {
        config,
        items,
        prediction_list,
        admission_order,
        visit_number: snapshot.visit_number,
        most_recent_item_id: snapshot.most_recent_item_id,
    })
}

/// The admission order must list every prediction list id exactly once.
fn admission_order_from_schema(
    order: Vec<String>,
    listed: &HashSet<String>,
) -> Result<VecDeque<String>, SnapshotError> {
    let mut seen = HashSet::with_capacity(order.len());
    for id in &order {
        if !listed.contains(id) {
            return Err(SnapshotError::Inconsistent {
                reason: format!("admission order references '{id}', which is not in the prediction list"),
            });
        }
        if !seen.insert(id.as_str()) {
            return Err(SnapshotError::Inconsistent {
                reason: format!("admission order contains '{id}' twice"),
            });
        }
    }
    if seen.len() != listed.len() {
        return Err(SnapshotError::Inconsistent {
            reason: format!(
                "admission order covers {} of {} prediction list entries",
                seen.len(),
                listed.len()
            ),
        });
    }
    Ok(order.into())
}

fn item_from_schema(id: &str, item: ItemStateV1) -> Result<ItemState, SnapshotError> {
    ensure_finite(&format!("items.{id}.timeOfLastVisit"), item.time_of_last_visit)?;
    ensure_finite(&format!("items.{id}.crfWeight"), item.crf_weight)?;
    if item.crf_weight < 0.0 {
        return Err(SnapshotError::InvalidValue {
            field: format!("items.{id}.crfWeight"),
            message: format!("must not be negative, got {}", item.crf_weight),
        });
    }

    let rank = match item.rank {
        None => UNRANKED,
        Some(rank) => usize::try_from(rank)
            .ok()
            .filter(|&r| r != UNRANKED)
            .ok_or_else(|| SnapshotError::InvalidValue {
                field: format!("items.{id}.rank"),
                message: format!("rank {rank} out of range"),
            })?,
    };

    let mut next_visits = BTreeMap::new();
    for (to, visits) in item.next_visits {
        let visits = visits
            .into_iter()
            .map(|v| visit_from_schema(id, &to, v))
            .collect::<Result<Vec<_>, _>>()?;
        next_visits.insert(to, visits);
    }

    Ok(ItemState {
        next_visits,
        number_of_visits: item.number_of_visits,
        time_of_last_visit: item.time_of_last_visit,
        crf_weight: item.crf_weight,
        last_visit_number_for_decay: item.last_visit_number_for_decay,
        rank,
    })
}

fn visit_from_schema(from: &str, to: &str, visit: ItemVisitV1) -> Result<ItemVisit, SnapshotError> {
    if visit.hour > 23 {
        return Err(SnapshotError::InvalidValue {
            field: format!("items.{from}.nextVisits.{to}.hour"),
            message: format!("expected 0-23, got {}", visit.hour),
        });
    }
    if !(1..=7).contains(&visit.weekday) {
        return Err(SnapshotError::InvalidValue {
            field: format!("items.{from}.nextVisits.{to}.weekday"),
            message: format!("expected 1-7, got {}", visit.weekday),
        });
    }
    Ok(ItemVisit::new(visit.hour, visit.weekday))
}

fn ensure_finite(field: &str, value: f64) -> Result<(), SnapshotError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SnapshotError::InvalidValue {
            field: field.to_string(),
            message: format!("must be finite, got {value}"),
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
