//! `task-manager list` command.

use crate::cli::output::{self, OutputFormat};
use crate::error::TaskError;
use crate::manager::TaskManager;
use crate::storage::repository::TaskRepository;

pub fn run<R: TaskRepository>(
    manager: &TaskManager<R>,
    format: OutputFormat,
) -> Result<String, TaskError> {
    output::format_task_list(&manager.list_tasks(), format)
}
