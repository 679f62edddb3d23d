//! Logging initialization.
//!
//! Diagnostics go to stderr through a `tracing-subscriber` fmt layer. The
//! level is controlled by `RUST_LOG` and defaults to `warn`, so per-post
//! fallbacks are visible without any configuration:
//! - `RUST_LOG=debug` - also show discovery details
//! - `RUST_LOG=info` - also show run summaries
//! - `RUST_LOG=error` - errors only

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the stderr subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (e.g. from tests) fails harmlessly
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
