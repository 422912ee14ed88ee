//! In-memory task list state
//!
//! [`TaskListStore`] is the single source of truth for the task collection
//! and the busy flag shown by the UI. It knows nothing about rendering or
//! timing: the UI layer decides when an intent is applied, the store only
//! applies it.
//!
//! None of the operations can fail. A blank title or an unknown task id is
//! silently ignored.

use crate::entities::{Task, TaskId};

/// Derived counters displayed in the statistics card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Ordered task collection with monotonically assigned ids
#[derive(Debug, Clone)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    next_id: TaskId,
    busy: bool,
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            busy: false,
        }
    }

    /// Append a new task and return it.
    ///
    /// Returns `None` without touching the store when `title` is blank.
    pub fn add_task(&mut self, title: &str, description: &str) -> Option<Task> {
        if title.trim().is_empty() {
            return None;
        }

        let task = Task::new(self.next_id, title, description);
        self.next_id += 1;
        self.tasks.push(task.clone());
        Some(task)
    }

    /// Replace the task `id` with a copy whose completion flag is `completed`.
    pub fn toggle_complete(&mut self, id: TaskId, completed: bool) {
        if let Some(slot) = self.tasks.iter_mut().find(|task| task.id == id) {
            *slot = slot.with_completed(completed);
        }
    }

    /// Remove the task `id`, keeping the order of the remaining ones.
    pub fn remove_task(&mut self, id: TaskId) {
        if let Some(index) = self.tasks.iter().position(|task| task.id == id) {
            self.tasks.remove(index);
        }
    }

    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.is_completed).count();
        TaskStats {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// Tasks in creation order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next created task will receive
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }
}
