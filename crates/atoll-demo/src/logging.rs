//! Tracing subscriber setup for the generator binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Initializes console logging.
///
/// The configured `level` string is the default filter; `RUST_LOG` takes
/// precedence when set. Timestamps count up from process start.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_timer(fmt::time::uptime())
        .init();
}
