use accessrank_core::config::ObservabilityConfig;
use accessrank_observability::{
    init_tracing, init_tracing_with_config, names, snapshot_span, update_span, visit_span,
};

#[test]
fn init_is_idempotent_and_spans_carry_names() {
    let config = ObservabilityConfig {
        log_level: "trace".to_string(),
        json: false,
    };
    init_tracing_with_config(&config);
    // Second initialization must not panic.
    init_tracing();
    init_tracing_with_config(&config);

    let span = visit_span!(Some("A"));
    assert_eq!(span.metadata().map(|m| m.name()), Some(names::VISIT));

    let span = update_span!(3usize);
    assert_eq!(span.metadata().map(|m| m.name()), Some(names::UPDATE));

    let span = snapshot_span!("encode");
    assert_eq!(span.metadata().map(|m| m.name()), Some(names::SNAPSHOT));
}
