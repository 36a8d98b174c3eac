//! `task-manager clear` command.

use crate::error::TaskError;
use crate::manager::TaskManager;
use crate::storage::repository::TaskRepository;

pub fn run<R: TaskRepository>(manager: &mut TaskManager<R>) -> Result<String, TaskError> {
    manager.clear_all_tasks()?;
    Ok("All tasks cleared".to_string())
}
