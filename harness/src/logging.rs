//! Development-time tracing for debugging validation decisions.
//!
//! Diagnostics only: output goes to stderr, gated by `RUST_LOG`, and is not
//! part of the harness product output. The consuming binary opts in by
//! calling [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for development logging.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset. Output: stderr,
/// compact format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
