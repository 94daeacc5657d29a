//! In-memory task store.
//!
//! Single source of truth for tasks and subtasks. There is one logical
//! writer at a time, so updates replace whole records; no field-level
//! merging. Ids are assigned from a monotonic counter shared by tasks and
//! subtasks.

use super::{NewSubtask, NewTask, Subtask, TargetId, Task};

#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ── Tasks ────────────────────────────────────────────────────────

    /// Create a task and return its assigned id.
    pub fn create_task(&mut self, new: NewTask) -> u64 {
        let id = self.alloc_id();
        self.tasks.push(Task {
            id,
            title: new.title,
            priority: new.priority,
            pomodoros_required: new.pomodoros_required,
            pomodoros_completed: 0,
            subtasks: Vec::new(),
            note: new.note,
        });
        id
    }

    pub fn find_task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the stored record with `updated`. Returns false when no
    /// task with that id exists.
    pub fn update_task(&mut self, updated: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Delete a task and all of its subtasks.
    pub fn delete_task(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    // ── Subtasks ─────────────────────────────────────────────────────

    /// Create a subtask under `task_id`. Returns the assigned id, or
    /// `None` when the parent task does not exist.
    pub fn create_subtask(&mut self, task_id: u64, new: NewSubtask) -> Option<u64> {
        if !self.tasks.iter().any(|t| t.id == task_id) {
            return None;
        }
        let id = self.alloc_id();
        let parent = self.tasks.iter_mut().find(|t| t.id == task_id)?;
        parent.subtasks.push(Subtask {
            id,
            task_id,
            title: new.title,
            priority: new.priority,
            pomodoros_required: new.pomodoros_required,
            pomodoros_completed: 0,
            note: new.note,
        });
        Some(id)
    }

    pub fn find_subtask(&self, id: u64) -> Option<&Subtask> {
        self.tasks
            .iter()
            .flat_map(|t| t.subtasks.iter())
            .find(|s| s.id == id)
    }

    pub fn update_subtask(&mut self, updated: Subtask) -> bool {
        for task in &mut self.tasks {
            if let Some(slot) = task.subtasks.iter_mut().find(|s| s.id == updated.id) {
                *slot = updated;
                return true;
            }
        }
        false
    }

    pub fn delete_subtask(&mut self, id: u64) -> bool {
        for task in &mut self.tasks {
            let before = task.subtasks.len();
            task.subtasks.retain(|s| s.id != id);
            if task.subtasks.len() != before {
                return true;
            }
        }
        false
    }

    // ── Target helpers ───────────────────────────────────────────────

    /// `(completed, required)` counters for a bound target, if it exists.
    pub fn target_progress(&self, target: TargetId) -> Option<(u32, u32)> {
        match target {
            TargetId::Task(id) => self
                .find_task(id)
                .map(|t| (t.pomodoros_completed, t.pomodoros_required)),
            TargetId::Subtask(id) => self
                .find_subtask(id)
                .map(|s| (s.pomodoros_completed, s.pomodoros_required)),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
