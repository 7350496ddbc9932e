//! Tracing/logging (shared setup).

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide observability with JSON logs.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::Json);
}

/// Initialize process-wide observability with an explicit log format.
pub fn init_with(format: LogFormat) {
    tracing::init(format);
}
