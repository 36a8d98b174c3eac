//! JSON file backed repository.

use crate::domain::task::{self, Task};
use crate::error::TaskError;
use crate::storage::repository::{max_id, TaskRepository};
use serde_json::Value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const EMPTY_COLLECTION: &str = "[]\n";

/// Stores the whole task collection as a pretty-printed JSON array in one file.
pub struct FileRepository {
    path: PathBuf,
    max_id: u32,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_id: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    fn io_error(&self, op: &str, source: std::io::Error) -> TaskError {
        tracing::error!(op, path = %self.path.display(), error = %source, "tasks file I/O failed");
        TaskError::Io {
            path: self.path_str(),
            source,
        }
    }

    fn parse_error(&self, op: &str, source: anyhow::Error) -> TaskError {
        tracing::error!(op, path = %self.path.display(), error = %source, "tasks file is malformed");
        TaskError::Parse {
            path: self.path_str(),
            source,
        }
    }

    /// Sibling path the next save is staged in before being renamed into place.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn parse(&self, content: &str) -> Result<Vec<Task>, TaskError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| self.parse_error("load", anyhow::Error::new(e)))?;

        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(self.parse_error(
                    "load",
                    anyhow::anyhow!(
                        "expected a JSON array of tasks, found {}",
                        task::kind_of(&other)
                    ),
                ))
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                Task::from_value(item).map_err(|e| {
                    self.parse_error("load", anyhow::anyhow!("invalid task at index {i}: {e}"))
                })
            })
            .collect()
    }
}

impl TaskRepository for FileRepository {
    fn load(&mut self) -> Result<Vec<Task>, TaskError> {
        if !self.path.exists() {
            std::fs::write(&self.path, EMPTY_COLLECTION).map_err(|e| self.io_error("load", e))?;
            tracing::debug!(path = %self.path.display(), "created empty tasks file");
            self.max_id = 0;
            return Ok(Vec::new());
        }

        let content =
            std::fs::read_to_string(&self.path).map_err(|e| self.io_error("load", e))?;
        let tasks = self.parse(&content)?;

        self.max_id = max_id(&tasks);
        tracing::debug!(count = tasks.len(), max_id = self.max_id, "loaded tasks");
        Ok(tasks)
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), TaskError> {
        let mut content = serde_json::to_string_pretty(tasks)
            .map_err(|e| self.parse_error("save", anyhow::Error::new(e)))?;
        content.push('\n');

        let temp = self.temp_path();
        std::fs::write(&temp, content).map_err(|e| self.io_error("save", e))?;
        if let Err(e) = std::fs::rename(&temp, &self.path) {
            let _ = std::fs::remove_file(&temp);
            return Err(self.io_error("save", e));
        }

        self.max_id = self.max_id.max(max_id(tasks));
        tracing::debug!(count = tasks.len(), max_id = self.max_id, "saved tasks");
        Ok(())
    }

    fn next_id(&self) -> Option<u32> {
        self.max_id.checked_add(1)
    }

    fn reset_id_counter(&mut self) {
        tracing::debug!(previous = self.max_id, "reset id counter");
        self.max_id = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, FileRepository) {
        let dir = TempDir::new().unwrap();
        let repo = FileRepository::new(dir.path().join("tasks.json"));
        (dir, repo)
    }

    fn completed(id: u32, description: &str) -> Task {
        let mut task = Task::new(id, description);
        task.complete();
        task
    }

    #[test]
    fn load_missing_file_creates_empty_array() {
        let (_dir, mut repo) = test_repo();
        let tasks = repo.load().unwrap();
        assert!(tasks.is_empty());
        assert_eq!(repo.next_id(), Some(1));

        let content = std::fs::read_to_string(repo.path()).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn save_and_load() {
        let (_dir, mut repo) = test_repo();
        let tasks = vec![Task::new(1, "Buy groceries"), completed(2, "Write docs")];
        repo.save(&tasks).unwrap();

        let mut fresh = FileRepository::new(repo.path());
        let loaded = fresh.load().unwrap();
        assert_eq!(loaded, tasks);
        assert_eq!(fresh.next_id(), Some(3));
    }

    #[test]
    fn save_pretty_prints_with_two_space_indent() {
        let (_dir, mut repo) = test_repo();
        repo.save(&[Task::new(1, "A")]).unwrap();
        let content = std::fs::read_to_string(repo.path()).unwrap();
        assert!(content.starts_with("[\n  {\n    \"id\": 1,"));
        assert!(!repo.temp_path().exists());
    }

    #[test]
    fn load_keeps_file_order_and_uses_max_id() {
        let (_dir, mut repo) = test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"id":5,"description":"five","completed":false},
                {"id":2,"description":"two","completed":true}]"#,
        )
        .unwrap();

        let tasks = repo.load().unwrap();
        let ids: Vec<u32> = tasks.iter().map(Task::id).collect();
        assert_eq!(ids, vec![5, 2]);
        assert_eq!(repo.next_id(), Some(6));
    }

    #[test]
    fn load_recomputes_counter_from_file() {
        let (_dir, mut repo) = test_repo();
        repo.save(&[Task::new(8, "eight")]).unwrap();
        assert_eq!(repo.next_id(), Some(9));

        std::fs::write(repo.path(), "[]").unwrap();
        repo.load().unwrap();
        assert_eq!(repo.next_id(), Some(1));
    }

    #[test]
    fn load_object_is_parse_error() {
        let (_dir, mut repo) = test_repo();
        std::fs::write(repo.path(), r#"{"id":1}"#).unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, TaskError::Parse { .. }));
        let msg = err.to_string();
        assert!(msg.contains("tasks.json"));
        assert!(msg.contains("expected a JSON array"));
    }

    #[test]
    fn load_invalid_json_is_parse_error() {
        let (_dir, mut repo) = test_repo();
        std::fs::write(repo.path(), "[{not json").unwrap();
        assert!(matches!(repo.load(), Err(TaskError::Parse { .. })));
    }

    #[test]
    fn load_empty_file_is_parse_error() {
        let (_dir, mut repo) = test_repo();
        std::fs::write(repo.path(), "").unwrap();
        assert!(matches!(repo.load(), Err(TaskError::Parse { .. })));
    }

    #[test]
    fn load_element_missing_field_names_index() {
        let (_dir, mut repo) = test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"id":1,"description":"ok","completed":false},{"id":2,"description":"bad"}]"#,
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, TaskError::Parse { .. }));
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn load_zero_id_is_parse_error() {
        let (_dir, mut repo) = test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"id":0,"description":"zero","completed":false}]"#,
        )
        .unwrap();

        let err = repo.load().unwrap_err();
        assert!(matches!(err, TaskError::Parse { .. }));
        assert!(err.to_string().contains("index 0"));
    }

    #[test]
    fn load_from_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut repo = FileRepository::new(dir.path());
        let err = repo.load().unwrap_err();
        assert!(matches!(err, TaskError::Io { .. }));
    }

    #[test]
    fn load_with_missing_parent_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("tasks.json");
        let mut repo = FileRepository::new(&path);

        let err = repo.load().unwrap_err();
        assert!(matches!(err, TaskError::Io { .. }));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn save_with_missing_parent_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut repo = FileRepository::new(dir.path().join("missing").join("tasks.json"));
        assert!(matches!(
            repo.save(&[Task::new(1, "A")]),
            Err(TaskError::Io { .. })
        ));
    }

    #[test]
    fn reset_does_not_touch_disk() {
        let (_dir, mut repo) = test_repo();
        repo.save(&[Task::new(1, "A"), Task::new(2, "B")]).unwrap();
        repo.reset_id_counter();
        assert_eq!(repo.next_id(), Some(1));

        let mut fresh = FileRepository::new(repo.path());
        assert_eq!(fresh.load().unwrap().len(), 2);
    }

    #[test]
    fn no_next_id_after_max_id() {
        let (_dir, mut repo) = test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"id":4294967295,"description":"x","completed":false}]"#,
        )
        .unwrap();

        assert_eq!(repo.load().unwrap().len(), 1);
        assert_eq!(repo.next_id(), None);
    }

    #[test]
    fn save_only_raises_counter() {
        let (_dir, mut repo) = test_repo();
        repo.save(&[Task::new(5, "A")]).unwrap();
        repo.save(&[Task::new(1, "B")]).unwrap();
        assert_eq!(repo.next_id(), Some(6));
    }
}
