//! Logging setup
//!
//! Logs go to stderr; stdout carries the MCP protocol.
//!
//! # Environment
//! - `RUST_LOG`: filter directive (default: `info`),
//!   e.g. `RUST_LOG=debug` or `RUST_LOG=site_visit_mcp=trace`

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init();
}

/// Initialize logging for tests, captured by the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
