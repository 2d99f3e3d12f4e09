//! Tracing subscriber setup.
//!
//! Events go to stderr so stdout carries only prediction output.

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::AppError;

/// Install the global subscriber.
///
/// With `quiet`, logging is switched off unless the filter was set explicitly
/// (the terminal form owns the screen and stray lines would tear it).
pub fn init(config: &AppConfig, quiet: bool) -> Result<(), AppError> {
    let directives = if quiet && !config.log_filter_explicit {
        "off"
    } else {
        config.log_filter.as_str()
    };
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| AppError::new(2, format!("Invalid log filter '{directives}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::new(2, format!("Failed to initialize logging: {e}")))
}
