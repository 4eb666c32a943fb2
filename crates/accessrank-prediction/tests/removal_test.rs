mod common;

use std::cell::Cell;
use std::rc::Rc;

use accessrank_core::config::PredictionConfig;
use accessrank_core::constants::SENTINEL_ITEM_ID;
use accessrank_prediction::AccessRank;
use common::{engine, list_ids, visit_all};

fn visited(ids: &[&str]) -> AccessRank {
    let (mut engine, clock) = engine(PredictionConfig::default());
    visit_all(&mut engine, &clock, ids);
    engine
}

#[test]
fn removing_current_and_other_item() {
    let mut engine = visited(&["A", "B", "C", "A"]);
    engine.remove_items(["C", "A"]);

    assert!(!engine.predictions().contains(&"A"));
    assert!(!engine.predictions().contains(&"C"));
    assert_eq!(engine.most_recent_item(), None);
    assert_eq!(engine.predictions(), ["B"]);
}

#[test]
fn removal_scrubs_incoming_transitions() {
    let mut engine = visited(&["A", "B", "C", "A", "C"]);
    engine.remove_items(vec!["C".to_string()]);

    let state = engine.state();
    assert!(!state.items.contains_key("C"));
    assert!(state.items.values().all(|record| record.transitions_to("C") == 0));
    assert_eq!(state.items["A"].transitions_to("B"), 1);
    assert!(!list_ids(&engine).contains(&"C"));
}

#[test]
fn removing_unknown_ids_is_a_no_op() {
    let mut engine = visited(&["A", "B"]);
    let before = engine.state().clone();
    engine.remove_items(["nope"]);

    let mut keys: Vec<_> = engine.state().items.keys().collect();
    let mut expected: Vec<_> = before.items.keys().collect();
    keys.sort();
    expected.sort();
    assert_eq!(keys, expected);
    assert_eq!(engine.most_recent_item(), Some("B"));
    assert_eq!(engine.predictions(), ["A"]);
}

#[test]
fn removing_the_sentinel_is_ignored() {
    let mut engine = visited(&["A", "B"]);
    engine.remove_items([SENTINEL_ITEM_ID]);

    assert!(engine.state().items.contains_key(SENTINEL_ITEM_ID));
    assert_eq!(engine.state().items[SENTINEL_ITEM_ID].transitions_to("A"), 1);
    assert_eq!(engine.most_recent_item(), Some("B"));
}

#[test]
fn removal_of_non_current_item_keeps_current() {
    let mut engine = visited(&["A", "B", "C"]);
    engine.remove_items(["A"]);

    assert_eq!(engine.most_recent_item(), Some("C"));
    assert_eq!(engine.predictions(), ["B"]);
}

#[test]
fn empty_removal_still_updates_and_notifies() {
    let mut engine = visited(&["A", "B"]);
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let observer = Rc::new(move |_: &AccessRank| counter.set(counter.get() + 1));
    engine.set_observer(&observer);

    engine.remove_items(Vec::<String>::new());

    assert_eq!(calls.get(), 1);
    // B was unranked and visited last, so it takes the tie.
    assert_eq!(list_ids(&engine), ["B", "A"]);
    assert_eq!(engine.state().items["B"].rank, 0);
    assert_eq!(engine.state().items["A"].rank, 1);
}

#[test]
fn removal_drops_item_from_admission_order() {
    let mut engine = visited(&["A", "B", "C"]);
    engine.remove_items(["B"]);
    assert_eq!(engine.state().admission_order, ["A", "C"]);
}

#[test]
fn list_cap_after_removal_evicts_oldest_survivor() {
    let config = PredictionConfig {
        max_visits: 3,
        ..PredictionConfig::default()
    };
    let (mut engine, clock) = engine(config);
    visit_all(&mut engine, &clock, &["A", "B", "C"]);
    engine.remove_items(["B"]);

    visit_all(&mut engine, &clock, &["D"]);
    assert_eq!(engine.state().admission_order, ["A", "C", "D"]);

    visit_all(&mut engine, &clock, &["E"]);
    assert_eq!(engine.state().admission_order, ["C", "D", "E"]);
    assert!(!list_ids(&engine).contains(&"A"));
}

#[test]
fn ranks_are_rewritten_after_removal() {
    let mut engine = visited(&["A", "B", "C", "A", "B"]);
    engine.remove_items(["C"]);

    let state = engine.state();
    for (index, scored) in state.prediction_list.iter().enumerate() {
        assert_eq!(state.items[&scored.id].rank, index);
    }
}

// ── Re-adding removed items ──────────────────────────────────────────────

#[test]
fn readded_item_starts_fresh() {
    let mut engine = visited(&["A", "B", "A", "B"]);
    engine.remove_items(["A"]);
    engine.visit("A");

    let a = &engine.state().items["A"];
    assert_eq!(a.number_of_visits, 1);
    assert_eq!(a.crf_weight, 1.0);
    assert!(a.next_visits.is_empty());
    assert_eq!(engine.state().items["B"].transitions_to("A"), 1);
}

#[test]
fn readded_item_returns_to_the_list() {
    let mut engine = visited(&["A", "B", "A", "B"]);
    engine.remove_items(["A"]);
    assert!(!list_ids(&engine).contains(&"A"));

    engine.visit("A");
    engine.visit("B");

    assert_eq!(list_ids(&engine).iter().filter(|id| **id == "A").count(), 1);
    assert_eq!(engine.predictions(), ["A"]);
    assert_eq!(engine.state().admission_order, ["B", "A"]);
}
