use std::collections::HashMap;

use accessrank_core::config::*;
use accessrank_core::errors::ConfigError;
use accessrank_core::models::ListStability;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = AccessRankConfig::from_toml("").unwrap();

    assert_eq!(config.prediction.list_stability, ListStability::Medium);
    assert!(config.prediction.use_time_weighting);
    assert_eq!(config.prediction.max_visits, 1000);

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[prediction]
list_stability = "high"
max_visits = 50
"#;
    let config = AccessRankConfig::from_toml(toml).unwrap();
    assert_eq!(config.prediction.list_stability, ListStability::High);
    assert_eq!(config.prediction.max_visits, 50);
    // Non-overridden fields keep defaults
    assert!(config.prediction.use_time_weighting);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_rejects_unknown_stability() {
    let toml = r#"
[prediction]
list_stability = "extreme"
"#;
    let err = AccessRankConfig::from_toml(toml).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_rejects_zero_max_visits() {
    let toml = r#"
[prediction]
max_visits = 0
"#;
    let err = AccessRankConfig::from_toml(toml).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "prediction.max_visits");
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn config_serde_roundtrip() {
    let mut config = AccessRankConfig::default();
    config.prediction.list_stability = ListStability::Low;
    config.prediction.use_time_weighting = false;
    let toml_str = config.to_toml().unwrap();
    let roundtripped = AccessRankConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.prediction, config.prediction);
}

#[test]
fn overrides_take_priority_over_file_values() {
    let mut config = AccessRankConfig::from_toml("[prediction]\nmax_visits = 10\n").unwrap();
    let env: HashMap<&str, &str> = [
        ("ACCESSRANK_LIST_STABILITY", "HIGH"),
        ("ACCESSRANK_USE_TIME_WEIGHTING", "false"),
        ("ACCESSRANK_MAX_VISITS", "25"),
        ("ACCESSRANK_LOG_LEVEL", "debug"),
    ]
    .into_iter()
    .collect();

    config
        .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
        .unwrap();

    assert_eq!(config.prediction.list_stability, ListStability::High);
    assert!(!config.prediction.use_time_weighting);
    assert_eq!(config.prediction.max_visits, 25);
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn unparsable_override_is_invalid_value() {
    let mut config = AccessRankConfig::default();
    let err = config
        .apply_overrides(|key| (key == "ACCESSRANK_MAX_VISITS").then(|| "lots".to_string()))
        .unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "prediction.max_visits"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn load_reports_missing_file() {
    let err = AccessRankConfig::load(std::path::Path::new("/nonexistent/accessrank.toml"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn with_stability_keeps_other_defaults() {
    let config = PredictionConfig::with_stability(ListStability::Low);
    assert_eq!(config.list_stability, ListStability::Low);
    assert_eq!(config.max_visits, defaults::DEFAULT_MAX_VISITS);
    assert!(config.use_time_weighting);
}

#[test]
fn prediction_config_validates_max_visits() {
    assert!(PredictionConfig::default().validate().is_ok());
    let zero = PredictionConfig {
        max_visits: 0,
        ..PredictionConfig::default()
    };
    match zero.validate().unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "max_visits"),
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}
