//! Configuration file loading and default values.

use crate::error::TaskError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "TASK_MANAGER_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// A `tracing_subscriber::EnvFilter` directive such as `warn` or `task_manager=debug`.
    pub level: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with the resolution order:
    /// CLI arg > env var > user config dir > defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Self, TaskError> {
        let path = config_path
            .map(PathBuf::from)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(default_path);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| TaskError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str::<Config>(&content)
            .map_err(|e| TaskError::Config(format!("{}: {e}", path.display())))
    }
}

fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("task-manager")
        .join("config.toml")
}
