//! Output formatting for tasks (color, plain, JSON).

use crate::domain::task::Task;
use crate::error::TaskError;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Color,
    Plain,
    Json,
}

impl OutputFormat {
    pub fn from_flags(json: bool, no_color: bool) -> Self {
        if json {
            Self::Json
        } else if no_color || std::env::var_os("NO_COLOR").is_some() {
            Self::Plain
        } else {
            Self::Color
        }
    }
}

/// Format a task list for display, one line per task in collection order.
pub fn format_task_list(tasks: &[Task], format: OutputFormat) -> Result<String, TaskError> {
    if format == OutputFormat::Json {
        let records = tasks
            .iter()
            .map(Task::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(TaskError::Output)?;
        return serde_json::to_string_pretty(&records).map_err(TaskError::Output);
    }

    if tasks.is_empty() {
        return Ok("No tasks found.".to_string());
    }

    Ok(tasks
        .iter()
        .map(|task| format_task_line(task, format))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn format_task_line(task: &Task, format: OutputFormat) -> String {
    let line = format!(
        "[{}] {} {}",
        task.id(),
        status_mark(task),
        task.description()
    );
    if format == OutputFormat::Color && task.is_completed() {
        line.dimmed().to_string()
    } else {
        line
    }
}

fn status_mark(task: &Task) -> &'static str {
    if task.is_completed() {
        "[X]"
    } else {
        "[ ]"
    }
}
