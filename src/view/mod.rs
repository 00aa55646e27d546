use std::io::{self, Write};

use chrono::Local;

use crate::models::{Filter, Task};
use crate::storage::{Storage, StorageError};
use crate::store::TaskStore;

/// Translates user gestures into store operations and keeps the slot in
/// sync: every gesture that changes the list is followed by a save of the
/// full list. Rendering (including filter selection) never mutates and
/// never saves.
pub struct Controller {
    store: TaskStore,
    storage: Storage,
}

impl Controller {
    /// Seed the store from the slot. A broken or absent slot starts an
    /// empty session (see [`Storage::load`]).
    pub fn new(storage: Storage) -> Self {
        let store = TaskStore::from_tasks(storage.load());
        Self { store, storage }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Add gesture. A rejected (blank) add changes nothing and skips the
    /// save.
    pub fn add(&mut self, text: &str) -> Result<Option<Task>, StorageError> {
        let created = self.store.add(text);
        if created.is_some() {
            self.storage.save(self.store.tasks())?;
        }
        Ok(created)
    }

    /// Toggle gesture. Returns `false` for an unknown id.
    pub fn toggle(&mut self, id: i64) -> Result<bool, StorageError> {
        let toggled = self.store.toggle(id);
        if toggled {
            self.storage.save(self.store.tasks())?;
        }
        Ok(toggled)
    }

    /// Delete gesture. Returns `false` for an unknown id.
    pub fn remove(&mut self, id: i64) -> Result<bool, StorageError> {
        let removed = self.store.remove(id);
        if removed {
            self.storage.save(self.store.tasks())?;
        }
        Ok(removed)
    }

    /// Clear-completed gesture. Returns how many tasks were removed.
    pub fn clear_completed(&mut self) -> Result<usize, StorageError> {
        let removed = self.store.clear_completed();
        if removed > 0 {
            self.storage.save(self.store.tasks())?;
        }
        Ok(removed)
    }

    /// Render the tasks matching `filter`: a date header, one line per task,
    /// and the count of incomplete tasks.
    pub fn render(&self, filter: Filter, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", Local::now().format("%A, %B %e, %Y"))?;
        for task in self.store.filtered(filter) {
            let mark = if task.completed { 'x' } else { ' ' };
            writeln!(out, "[{}] {:>13}  {}", mark, task.id, task.text)?;
        }
        let left = self.store.active_count();
        writeln!(
            out,
            "{} item{} left",
            left,
            if left == 1 { "" } else { "s" }
        )?;
        Ok(())
    }
}
