//! # accessrank-observability
//!
//! Tracing subscriber setup and the span macros the engine opens around
//! each public operation.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_config, spans::names};
