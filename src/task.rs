//! Task data structure.
//!
//! A task is a single user-entered to-do item. It carries a unique identifier
//! assigned by the [`TaskStore`](crate::store::TaskStore) and a trimmed,
//! non-empty text description. Tasks are never edited after creation.

use serde::Serialize;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
}

impl Task {
    /// Create a task. Callers are responsible for trimming the description.
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Task {
            id,
            description: description.into(),
        }
    }
}
