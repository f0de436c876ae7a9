//! Logging Infrastructure
//!
//! `RUST_LOG` takes precedence; otherwise `level` is the default filter.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber; call once at startup
pub fn init_logger(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
