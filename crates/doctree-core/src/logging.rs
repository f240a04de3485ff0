//! Tracing subscriber initialization.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber from configuration.
///
/// The `RUST_LOG` environment variable, when set, takes precedence over
/// the configured level. Calling this more than once is a no-op beyond
/// the first successful registration.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            let _ = fmt().with_env_filter(filter).json().try_init();
        }
        _ => {
            let _ = fmt().with_env_filter(filter).try_init();
        }
    }
}
