//! Error types for task-manager.

use thiserror::Error;

/// All error types that can occur in task-manager.
#[derive(Error, Debug)]
pub enum TaskError {
    // Input errors (exit code: 1)
    /// No task with the given ID exists.
    #[error("Task not found: {0}")]
    TaskNotFound(u32),

    /// An invalid argument was provided.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The highest possible task ID has already been issued.
    #[error("No task IDs left (highest ID {} already in use)", u32::MAX)]
    IdsExhausted,

    /// Command output could not be rendered.
    #[error("Failed to format output: {0}")]
    Output(#[source] serde_json::Error),

    // Storage errors
    /// The tasks file could not be created, opened, read or written.
    #[error("File I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The tasks file is not a JSON array of well-formed task records.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    // Config errors (exit code: 4)
    /// Failed to read or parse the configuration file.
    #[error("Failed to read configuration: {0}")]
    Config(String),
}

impl TaskError {
    /// Returns the process exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TaskNotFound(_)
            | Self::InvalidArgument(_)
            | Self::IdsExhausted
            | Self::Output(_)
            | Self::Io { .. } => 1,

            Self::Parse { .. } => 2,

            Self::Config(_) => 4,
        }
    }

    /// A follow-up line shown to the user below the error message.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Parse { path, .. } => Some(format!(
                "The tasks file may be corrupted. Check or delete {path}."
            )),
            Self::Io { .. } => {
                Some("Check file permissions and available disk space.".to_string())
            }
            Self::TaskNotFound(_) => {
                Some("Run 'task-manager list' to see existing task IDs.".to_string())
            }
            Self::IdsExhausted => {
                Some("Run 'task-manager clear' to start numbering from 1 again.".to_string())
            }
            Self::InvalidArgument(_) | Self::Output(_) | Self::Config(_) => None,
        }
    }
}
