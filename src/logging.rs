//! Logging setup.
//!
//! The library only emits `tracing` events. Binaries and tests pick a
//! subscriber with one of the functions below; both are safe to call more
//! than once.

use tracing_subscriber::{fmt, EnvFilter};

/// Install a formatting subscriber for applications.
///
/// The filter comes from `WORD_DETECTIVE_LOG`, then `RUST_LOG`, then `"info"`.
pub fn init_logging() {
    fmt()
        .with_env_filter(filter_from_env("info"))
        .with_target(false)
        .try_init()
        .ok();
}

/// Install a subscriber whose output is captured by the test harness.
///
/// Quiet by default (`"warn"`).
pub fn init_test_logging() {
    fmt()
        .with_env_filter(filter_from_env("warn"))
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

fn filter_from_env(default: &str) -> EnvFilter {
    std::env::var("WORD_DETECTIVE_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(default))
}
