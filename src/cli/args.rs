//! Command-line argument definitions using clap derive.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "task-manager",
    version,
    about = "Task Manager CLI - Simple task management",
    after_help = "Examples:\n  task-manager add Buy groceries\n  task-manager list\n  task-manager complete 1"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override config file path.
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task.
    Add {
        /// Task description. Multiple words are joined with spaces.
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// List all tasks.
    List,

    /// Mark a task as completed.
    Complete {
        /// Task ID.
        id: u32,
    },

    /// Remove all tasks and restart numbering at 1.
    Clear,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}
