use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Task;

/// File name of the persisted slot. There is no version field; a new write
/// always fully replaces the old contents.
pub const STORE_FILE: &str = "tasks.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not determine data directory")]
    NoDataDir,
    #[error("failed to write task list: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize task list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The only component touching durable storage.
///
/// The whole task list lives in a single JSON slot. `save` surfaces write
/// failures to the caller; `load` never fails, since a broken slot must not
/// prevent the application from starting.
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn open(path: PathBuf) -> Self {
        Self { path }
    }

    /// Slot under the platform data directory, e.g.
    /// `~/.local/share/punchlist/tasks.json` on Linux.
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs =
            directories::ProjectDirs::from("", "", "punchlist").ok_or(StorageError::NoDataDir)?;
        Ok(Self::open(dirs.data_dir().join(STORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the full list and overwrite the slot.
    ///
    /// Failures surface to the caller; the in-memory list is never touched,
    /// so a failed save leaves the session usable.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(tasks)?;
        fs::write(&self.path, json)?;
        tracing::debug!("saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Read the slot back. An absent slot yields an empty list; unreadable,
    /// unparseable, or invariant-violating contents are logged and treated
    /// as absent data.
    pub fn load(&self) -> Vec<Task> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        let tasks: Vec<Task> = match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!(
                    "stored task list at {} is not parseable, starting empty: {}",
                    self.path.display(),
                    e
                );
                return Vec::new();
            }
        };

        if let Err(reason) = validate(&tasks) {
            tracing::warn!(
                "stored task list at {} is malformed ({}), starting empty",
                self.path.display(),
                reason
            );
            return Vec::new();
        }

        tasks
    }
}

/// A stored list that violates the task invariants does not conform to the
/// expected structure and reads as absent data.
fn validate(tasks: &[Task]) -> Result<(), &'static str> {
    let mut seen = HashSet::new();
    for task in tasks {
        if task.text.trim().is_empty() {
            return Err("empty task text");
        }
        if !seen.insert(task.id) {
            return Err("duplicate task id");
        }
    }
    Ok(())
}
