use accessrank_core::models::ItemState;
use accessrank_decay::formula;
use accessrank_decay::{CrfEngine, DEFAULT_DECAY_RATE};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn first_visit_yields_weight_one() {
    let engine = CrfEngine::new();
    let mut state = ItemState::new();
    engine.register_visit(&mut state, 1, 100.0);

    assert!(approx(state.crf_weight, 1.0));
    assert_eq!(state.number_of_visits, 1);
    assert_eq!(state.last_visit_number_for_decay, 1);
    assert_eq!(state.time_of_last_visit, 100.0);
}

#[test]
fn ten_elapsed_visits_halve_the_weight() {
    let engine = CrfEngine::new();
    let mut state = ItemState::new();
    engine.register_visit(&mut state, 1, 0.0);
    engine.register_visit(&mut state, 11, 0.0);

    // 1 × 2^(-1) + 1
    assert!(approx(state.crf_weight, 1.5));
    assert_eq!(state.number_of_visits, 2);
}

#[test]
fn consecutive_visits_accumulate() {
    let engine = CrfEngine::new();
    let mut state = ItemState::new();
    engine.register_visit(&mut state, 1, 0.0);
    engine.register_visit(&mut state, 2, 0.0);

    let expected = 2f64.powf(-0.1) + 1.0;
    assert!(approx(state.crf_weight, expected));
}

#[test]
fn decayed_weight_halves_every_ten_visits() {
    assert!(approx(formula::decayed(1.0, DEFAULT_DECAY_RATE, 0), 1.0));
    assert!(approx(formula::decayed(1.0, DEFAULT_DECAY_RATE, 20), 0.25));
}

#[test]
fn visit_number_behind_last_decay_point_does_not_grow_weight() {
    let engine = CrfEngine::new();
    let mut state = ItemState::new();
    state.crf_weight = 3.0;
    state.last_visit_number_for_decay = 50;
    engine.register_visit(&mut state, 40, 0.0);
    assert!(approx(state.crf_weight, 4.0));
}

#[test]
fn accumulate_uses_the_given_rate() {
    // 1 × 2^(-1) + 1
    assert!(approx(formula::accumulate(1.0, 1.0, 1), 1.5));
}

#[test]
fn saturation_limit_for_default_rate() {
    let limit = 1.0 / (1.0 - formula::decay_factor(DEFAULT_DECAY_RATE, 1));
    assert!(limit > 14.0 && limit < 15.0, "limit = {limit}");
}
