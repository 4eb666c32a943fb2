//! Span definitions per engine operation: visit, list update, removal, snapshot.

/// Span around recording one visit.
#[macro_export]
macro_rules! visit_span {
    ($item:expr) => {
        tracing::debug_span!("accessrank.visit", item = ?$item)
    };
}

/// Span around one prediction list maintenance pass.
#[macro_export]
macro_rules! update_span {
    ($list_len:expr) => {
        tracing::trace_span!("accessrank.update", list_len = $list_len)
    };
}

/// Span around a removal batch.
#[macro_export]
macro_rules! removal_span {
    ($count:expr) => {
        tracing::debug_span!("accessrank.removal", count = $count)
    };
}

/// Span around snapshot encode or decode.
#[macro_export]
macro_rules! snapshot_span {
    ($direction:expr) => {
        tracing::info_span!("accessrank.snapshot", direction = %$direction)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const VISIT: &str = "accessrank.visit";
    pub const UPDATE: &str = "accessrank.update";
    pub const REMOVAL: &str = "accessrank.removal";
    pub const SNAPSHOT: &str = "accessrank.snapshot";
}
