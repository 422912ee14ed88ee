use serde::{Deserialize, Serialize};

/// Identifier of a task, unique for the lifetime of one store.
pub type TaskId = u64;

/// A single to-do entry.
///
/// Records are never edited in place: completion changes go through
/// [`Task::with_completed`], which yields a new value that replaces the old
/// one in the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            is_completed: false,
        }
    }

    /// Copy of this task with only the completion flag changed
    #[must_use]
    pub fn with_completed(&self, completed: bool) -> Self {
        Self {
            is_completed: completed,
            ..self.clone()
        }
    }

    /// Whether the description carries anything worth displaying
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}
