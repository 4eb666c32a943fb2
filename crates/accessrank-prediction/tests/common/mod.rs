#![allow(dead_code)]

use std::rc::Rc;

use accessrank_core::config::PredictionConfig;
use accessrank_core::models::ListStability;
use accessrank_core::traits::ManualClock;
use accessrank_prediction::AccessRank;
use chrono::{DateTime, Duration, FixedOffset};

/// Wednesday 2023-11-15, 09:00 UTC.
pub fn wednesday_morning() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2023-11-15T09:00:00+00:00").unwrap()
}

pub fn manual_clock() -> Rc<ManualClock> {
    Rc::new(ManualClock::new(wednesday_morning()))
}

pub fn engine(config: PredictionConfig) -> (AccessRank, Rc<ManualClock>) {
    let clock = manual_clock();
    (AccessRank::with_clock(config, clock.clone()).unwrap(), clock)
}

pub fn engine_with(stability: ListStability) -> AccessRank {
    engine(PredictionConfig::with_stability(stability)).0
}

/// Visit each id in order, one minute apart.
pub fn visit_all(engine: &mut AccessRank, clock: &ManualClock, ids: &[&str]) {
    for id in ids {
        engine.visit(id);
        clock.advance(Duration::minutes(1));
    }
}

pub fn list_ids(engine: &AccessRank) -> Vec<&str> {
    engine
        .state()
        .prediction_list
        .iter()
        .map(|s| s.id.as_str())
        .collect()
}
