use chrono::Utc;

use crate::models::{Filter, Task};

/// The canonical in-memory task list and its sole mutator.
///
/// Display order is insertion order (newest first), except that completed
/// tasks sit after all incomplete ones. Every mutating operation leaves the
/// list satisfying:
///
/// - task ids are unique,
/// - no task has empty trimmed text,
/// - after a toggle, no completed task precedes an incomplete one.
pub struct TaskStore {
    tasks: Vec<Task>,
    last_id: i64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            last_id: 0,
        }
    }

    /// Seed a store from persisted state. Id allocation resumes past the
    /// largest loaded id so restored tasks never collide with new ones.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or(0);
        Self { tasks, last_id }
    }

    /// Create a task at the front of the list and return a copy of it.
    ///
    /// Empty or whitespace-only text is rejected: the list is unchanged and
    /// `None` is returned. The stored text is trimmed.
    pub fn add(&mut self, text: &str) -> Option<Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task {
            id: self.next_id(),
            text: text.to_string(),
            completed: false,
        };
        tracing::debug!("add task {}", task.id);
        self.tasks.insert(0, task.clone());
        Some(task)
    }

    /// Flip the completion flag of the task with `id`, then re-partition the
    /// full list so every incomplete task precedes every completed one.
    /// Returns `false` (and changes nothing) if no such task exists.
    pub fn toggle(&mut self, id: i64) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        task.completed = !task.completed;
        tracing::debug!("toggle task {} -> completed={}", id, task.completed);

        // sort_by_key is stable, so relative order within each partition
        // is preserved.
        self.tasks.sort_by_key(|t| t.completed);
        true
    }

    /// Remove the task with `id`. Returns `false` if no such task exists.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() < before;
        if removed {
            tracing::debug!("remove task {}", id);
        }
        removed
    }

    /// Remove every completed task, keeping the relative order of the rest.
    /// Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            tracing::debug!("cleared {} completed tasks", removed);
        }
        removed
    }

    /// A lazily-derived read-only view of the tasks matching `filter`.
    pub fn filtered(&self, filter: Filter) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }

    /// Count of incomplete tasks.
    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// The full list in display order. Persistence always stores this,
    /// regardless of the active filter.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Fresh unique id: the current timestamp in milliseconds, bumped past
    /// the last issued id when adds land within the same millisecond.
    fn next_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
