// src/log.rs
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, fmt::time::Uptime};

static INIT: Once = Once::new();

/// Install the global subscriber: stderr, elapsed-time stamps,
/// `RUST_LOG` overrides the `info` default. Safe to call more than once.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = fmt()
            .with_env_filter(filter)
            .with_timer(Uptime::default())
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
