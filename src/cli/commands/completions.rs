//! `task-manager completions` command.

use crate::cli::args::Cli;
use crate::error::TaskError;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Render the completion script for `shell`, named after the installed binary.
pub fn run(shell: Shell) -> Result<String, TaskError> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    let mut script = Vec::new();
    generate(shell, &mut cmd, bin_name, &mut script);
    String::from_utf8(script)
        .map_err(|e| TaskError::InvalidArgument(format!("{shell} completions are not UTF-8: {e}")))
}
