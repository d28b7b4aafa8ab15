//! Diagnostic logging to stderr.
//!
//! Filter directives come from `MARBLEZERO_LOG`, then `RUST_LOG`, and default
//! to warnings only so hook-driven ingestion stays quiet.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVES: &str = "marblezero=warn,marblezero_engine=warn";

fn filter_directives() -> String {
    ["MARBLEZERO_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_DIRECTIVES.to_string())
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init() {
    let filter = EnvFilter::try_new(filter_directives())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
