//! Task and subtask records.
//!
//! Tasks own an ordered list of subtasks; subtasks carry a non-owning
//! `task_id` back-reference used only for lookups. Both carry a required
//! and a completed pomodoro counter. Records are owned exclusively by the
//! [`TaskStore`]; the session layer reads them and issues whole-record
//! update requests.

mod store;

pub use store::TaskStore;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task priority for list ordering and badge display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Reference to the record a running session increments on completion.
///
/// A session is bound to exactly one task or one subtask, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum TargetId {
    Task(u64),
    Subtask(u64),
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetId::Task(id) => write!(f, "task {id}"),
            TargetId::Subtask(id) => write!(f, "subtask {id}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    pub pomodoros_required: u32,
    pub pomodoros_completed: u32,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub id: u64,
    /// Owning task, for lookups only.
    pub task_id: u64,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    pub pomodoros_required: u32,
    pub pomodoros_completed: u32,
    #[serde(default)]
    pub note: String,
}

impl Task {
    /// Whether the task's own counter reached its required count.
    pub fn is_complete(&self) -> bool {
        self.pomodoros_completed >= self.pomodoros_required
    }
}

impl Subtask {
    pub fn is_complete(&self) -> bool {
        self.pomodoros_completed >= self.pomodoros_required
    }
}

/// Parameters for creating a task; the store assigns the id.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub priority: Priority,
    pub pomodoros_required: u32,
    pub note: String,
}

/// Parameters for creating a subtask under an existing task.
#[derive(Debug, Clone, Default)]
pub struct NewSubtask {
    pub title: String,
    pub priority: Priority,
    pub pomodoros_required: u32,
    pub note: String,
}
