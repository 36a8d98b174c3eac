//! In-memory repository used to test the manager without touching disk.

use crate::domain::task::Task;
use crate::error::TaskError;
use crate::storage::repository::{max_id, TaskRepository};

#[derive(Debug, Default)]
pub struct MemoryRepository {
    pub stored: Vec<Task>,
    pub save_count: usize,
    pub fail_next_save: bool,
    max_id: u32,
}

impl MemoryRepository {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            stored: tasks,
            ..Self::default()
        }
    }
}

impl TaskRepository for MemoryRepository {
    fn load(&mut self) -> Result<Vec<Task>, TaskError> {
        self.max_id = max_id(&self.stored);
        Ok(self.stored.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), TaskError> {
        if std::mem::take(&mut self.fail_next_save) {
            return Err(TaskError::Io {
                path: "<memory>".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "simulated failure"),
            });
        }
        self.stored = tasks.to_vec();
        self.save_count += 1;
        self.max_id = self.max_id.max(max_id(tasks));
        Ok(())
    }

    fn next_id(&self) -> Option<u32> {
        self.max_id.checked_add(1)
    }

    fn reset_id_counter(&mut self) {
        self.max_id = 0;
    }
}
