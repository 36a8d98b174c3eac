//! `task-manager add` command.

use crate::error::TaskError;
use crate::manager::TaskManager;
use crate::storage::repository::TaskRepository;

pub fn run<R: TaskRepository>(
    manager: &mut TaskManager<R>,
    words: Vec<String>,
) -> Result<String, TaskError> {
    let description = words.join(" ");
    let id = manager.add_task(description)?;
    Ok(format!("Task added with ID: {id}"))
}
