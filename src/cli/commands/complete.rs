//! `task-manager complete` command.

use crate::error::TaskError;
use crate::manager::TaskManager;
use crate::storage::repository::TaskRepository;

pub fn run<R: TaskRepository>(manager: &mut TaskManager<R>, id: u32) -> Result<String, TaskError> {
    if manager.complete_task(id)? {
        Ok(format!("Task {id} marked as completed"))
    } else {
        Err(TaskError::TaskNotFound(id))
    }
}
