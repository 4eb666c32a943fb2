//! Error handling for AccessRank.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod snapshot_error;

pub use config_error::ConfigError;
pub use snapshot_error::SnapshotError;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AccessRankError {
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

pub type AccessRankResult<T> = Result<T, AccessRankError>;
