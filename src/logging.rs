//! Diagnostic logging to stderr.

use crate::config::settings::LogConfig;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TASK_MANAGER_LOG";

/// Install the global subscriber. `TASK_MANAGER_LOG` wins over the configured level.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
