//! The storage capability the task manager is written against.

use crate::domain::task::Task;
use crate::error::TaskError;

/// Durable storage for the task collection plus ID issuance.
///
/// Implementations always load and save the whole collection; there is no
/// record-level update.
pub trait TaskRepository {
    /// Load every stored task, in stored order, and recompute the ID counter
    /// from the highest ID seen.
    fn load(&mut self) -> Result<Vec<Task>, TaskError>;

    /// Replace the stored collection with `tasks`. Raises the ID counter if
    /// any saved task has a higher ID.
    fn save(&mut self, tasks: &[Task]) -> Result<(), TaskError>;

    /// The ID the next new task should get, or `None` once `u32::MAX` has
    /// been issued. Does no I/O.
    fn next_id(&self) -> Option<u32>;

    /// Forget every issued ID so numbering restarts at 1. Does no I/O; the
    /// caller is expected to save the emptied collection afterwards.
    fn reset_id_counter(&mut self);
}

/// Highest ID in `tasks`, or 0 for an empty slice.
pub fn max_id(tasks: &[Task]) -> u32 {
    tasks.iter().map(Task::id).max().unwrap_or(0)
}
