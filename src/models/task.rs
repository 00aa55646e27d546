use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// Tasks are flat: no nesting and no scheduling. The id is derived from the
/// creation timestamp in milliseconds (bumped past the previously issued id
/// when two adds land in the same millisecond) and is never reused or
/// reassigned. `text` is stored trimmed and is never empty; whitespace-only
/// input is rejected before a task exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

/// Which tasks a view shows. Selecting a filter never mutates the list or
/// its order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}
