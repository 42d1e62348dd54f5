//! Tracing/logging setup shared by hosts and tests.

/// Logging configuration.
pub mod logging;

/// Initialize process-wide tracing/logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    logging::init();
}
