//! Logging setup.
//!
//! Events go to stderr so stdout carries only the run report.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when neither `RUST_LOG` nor `LOG_LEVEL` gives a usable filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build the event filter.
///
/// `rust_log` wins when it parses, then `level`, then [`DEFAULT_LOG_LEVEL`].
pub fn filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install the global stderr subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init(level: &str) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter(rust_log.as_deref(), level))
        .try_init();
}
