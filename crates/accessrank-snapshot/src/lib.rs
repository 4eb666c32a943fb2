//! # accessrank-snapshot
//!
//! Explicit, versioned snapshot contract for engine state.
//!
//! The wire shape lives in [`schema`] and is independent of the in-memory
//! models: encoding copies [`EngineState`](accessrank_core::EngineState) into
//! the schema types, decoding validates every field before building a state.
//! A snapshot either decodes completely or fails with a
//! [`SnapshotError`](accessrank_core::SnapshotError).

pub mod decode;
pub mod encode;
pub mod schema;

pub use decode::{decode, decode_from_str, decode_optional};
pub use encode::{encode, encode_to_string};
pub use schema::SNAPSHOT_VERSION;
