//! Logging infrastructure.
//!
//! Tracing setup for binaries embedding the library.

use tracing_subscriber::EnvFilter;

/// Initialize logging at the `info` level.
///
/// The level can be overridden with the RUST_LOG environment variable.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a specific default level
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
