//! The task entity and its JSON record form.

use serde::{de, Deserialize, Serialize};
use serde_json::Value;

/// A single to-do item.
///
/// `id` and `description` are fixed at creation; `completed` only ever moves
/// from `false` to `true`. Every field is required when deserializing, so a
/// record with a missing or wrong-typed field is rejected rather than filled
/// with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: u32,
    description: String,
    completed: bool,
}

impl Task {
    /// Create a new, pending task.
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Mark the task as completed. There is no way back to pending.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// The `{ "id", "description", "completed" }` record for this task, keys in that order.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Rebuild a task from its record form.
    ///
    /// Only JSON objects are accepted; serde would otherwise also take a
    /// positional `[id, description, completed]` array.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(de::Error::custom(format!(
                "expected a task object, found {}",
                kind_of(&value)
            )));
        }
        let task: Self = serde_json::from_value(value)?;
        if task.id == 0 {
            return Err(de::Error::custom("task id must be a positive integer, found 0"));
        }
        Ok(task)
    }
}

/// Short name of a JSON value's type, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
