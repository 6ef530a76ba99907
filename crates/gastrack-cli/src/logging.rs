use crate::types::LogLevel;
use std::io;
use tracing_subscriber::EnvFilter;

/// Send diagnostics to stderr so stdout stays clean for `--format json`.
///
/// `RUST_LOG` takes precedence over `--log-level` when set.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
