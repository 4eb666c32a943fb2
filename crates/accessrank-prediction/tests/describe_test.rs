mod common;

use accessrank_core::config::PredictionConfig;
use common::{engine, visit_all};

#[test]
fn markov_description_lists_sources_in_order() {
    let (mut engine, clock) = engine(PredictionConfig::default());
    visit_all(&mut engine, &clock, &["A", "B", "A", "C"]);

    let text = engine.markov_description();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "<access_rank_nil> > A (1)",
            "A > B (1), C (1)",
            "B > A (1)",
            "C > ",
        ]
    );
}

#[test]
fn prediction_list_description_follows_list_order() {
    let (mut engine, clock) = engine(PredictionConfig::default());
    visit_all(&mut engine, &clock, &["A", "B"]);

    // A was rescored from B; B was just admitted.
    let expected = format!("A: {}\nB: 0\n", 0.5f64.powf(1.65));
    assert_eq!(engine.prediction_list_description(), expected);
}

#[test]
fn score_description_has_one_line_per_entry() {
    let (mut engine, clock) = engine(PredictionConfig::default());
    visit_all(&mut engine, &clock, &["A", "B", "C"]);

    let text = engine.score_description();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().all(|line| line.contains("markov: ") && line.contains("time: 1")));
    assert!(text.starts_with("B: score: "));
}

#[test]
fn empty_engine_descriptions_are_empty() {
    let (engine, _) = engine(PredictionConfig::default());
    assert!(engine.markov_description().is_empty());
    assert!(engine.score_description().is_empty());
    assert!(engine.prediction_list_description().is_empty());
}
