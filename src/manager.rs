//! Add/list/complete/clear on top of a [`TaskRepository`].

use crate::domain::task::Task;
use crate::error::TaskError;
use crate::storage::repository::TaskRepository;

/// Owns the working task collection for one process run.
///
/// The collection is loaded once on construction and the whole of it is
/// saved after every mutation. A failed save leaves the in-memory collection
/// already changed.
pub struct TaskManager<R: TaskRepository> {
    repository: R,
    tasks: Vec<Task>,
}

impl<R: TaskRepository> TaskManager<R> {
    pub fn new(mut repository: R) -> Result<Self, TaskError> {
        let tasks = repository.load()?;
        Ok(Self { repository, tasks })
    }

    /// Append a new pending task and return its ID.
    pub fn add_task(&mut self, description: impl Into<String>) -> Result<u32, TaskError> {
        let id = self.repository.next_id().ok_or(TaskError::IdsExhausted)?;
        self.tasks.push(Task::new(id, description));
        self.repository.save(&self.tasks)?;
        tracing::info!(id, "added task");
        Ok(id)
    }

    /// Snapshot of every task in insertion order.
    pub fn list_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Mark the first task with `id` as completed.
    ///
    /// Returns `Ok(false)` when no such task exists; errors are reserved for
    /// persistence failures.
    pub fn complete_task(&mut self, id: u32) -> Result<bool, TaskError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id() == id) else {
            return Ok(false);
        };
        task.complete();
        self.repository.save(&self.tasks)?;
        tracing::info!(id, "completed task");
        Ok(true)
    }

    /// Drop every task and restart ID numbering at 1.
    pub fn clear_all_tasks(&mut self) -> Result<(), TaskError> {
        self.tasks.clear();
        self.repository.reset_id_counter();
        self.repository.save(&self.tasks)?;
        tracing::info!("cleared all tasks");
        Ok(())
    }

    #[cfg(test)]
    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[cfg(test)]
    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }
}
