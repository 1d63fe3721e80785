//! Tracing/logging setup shared by the wishlist binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide tracing with the format chosen by
/// `WISHLIST_LOG_FORMAT` (`json` by default, `pretty` for local work).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(LogFormat::from_env());
}
