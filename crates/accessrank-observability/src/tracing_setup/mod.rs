//! Tracing initialization and configuration.

pub mod spans;

use std::sync::Once;

use accessrank_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging from the `ACCESSRANK_LOG` environment variable.
///
/// Format: `ACCESSRANK_LOG=accessrank_prediction=debug,accessrank_snapshot=info`.
/// Falls back to `info` if unset or invalid. Only the first call installs a
/// subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("ACCESSRANK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}

/// Initialize logging from config: `log_level` as the filter, JSON or text output.
///
/// `ACCESSRANK_LOG`, when set, still wins over `log_level`. Only the first
/// call installs a subscriber.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ACCESSRANK_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        if config.json {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).json())
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true))
                .with(filter)
                .init();
        }
    });
}
