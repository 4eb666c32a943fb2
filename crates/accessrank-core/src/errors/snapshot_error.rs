/// Snapshot codec errors.
///
/// A failed decode never yields a partially initialized engine.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot has no version field")]
    MissingVersion,

    #[error("unsupported snapshot version {found}, expected {supported}")]
    UnsupportedVersion { found: String, supported: u32 },

    #[error("malformed snapshot: {message}")]
    Malformed { message: String },

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("inconsistent snapshot state: {reason}")]
    Inconsistent { reason: String },

    #[error("snapshot encoding failed: {message}")]
    Encode { message: String },
}
