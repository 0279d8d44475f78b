//! In-memory task store.
//!
//! This module provides the [`TaskStore`] struct which owns the ordered task
//! list, the id counter and the sort direction flag, along with the collation
//! used to order descriptions. It has no knowledge of how tasks are displayed;
//! views observe [`TaskStore::revision`] to know when the list changed.

use icu_collator::{CaseFirst, Collator, CollatorError, CollatorOptions, Strength};

use crate::drag::ReorderRequest;
use crate::task::Task;

/// Ordered task list with monotonically assigned ids.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    sort_ascending: bool,
    revision: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 0,
            sort_ascending: true,
            revision: 0,
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks in display order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Id the next successful [`add`](Self::add) will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Direction the next [`sort`](Self::sort) will use.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Change counter, bumped every time the store signals a change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Index of a task in display order.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn signal(&mut self) {
        self.revision += 1;
    }

    /// Append a task with the given description.
    ///
    /// The description is trimmed first; an empty result leaves the store
    /// untouched and returns `None`.
    pub fn add(&mut self, description: &str) -> Option<Task> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        let task = Task::new(self.next_id, description);
        self.next_id += 1;
        self.tasks.push(task.clone());
        tracing::debug!(id = task.id, "added task");
        self.signal();
        Some(task)
    }

    /// Remove the task with `id`. Unknown ids are ignored but still signal a
    /// change so the view re-renders.
    pub fn remove(&mut self, id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            tracing::debug!(id, "removed task");
        }
        self.signal();
    }

    /// Move `source` into the slot currently held by `target`.
    ///
    /// Both positions are resolved before the source is taken out, so moving
    /// upwards lands immediately before the target and moving downwards lands
    /// immediately after it. Equal or unknown ids are a no-op.
    pub fn reorder(&mut self, source: u64, target: u64) {
        if source == target {
            return;
        }
        let (Some(from), Some(to)) = (self.position(source), self.position(target)) else {
            return;
        };
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        tracing::debug!(source, target, from, to, "reordered task");
        self.signal();
    }

    /// Apply a reorder produced by a drag interaction.
    pub fn apply(&mut self, request: ReorderRequest) {
        self.reorder(request.source, request.target);
    }

    /// Sort by description in the current direction, then flip the direction.
    ///
    /// The sort is stable: tasks with equal descriptions keep their relative
    /// order whichever way the list is sorted.
    pub fn sort(&mut self) {
        let collator = match description_collator() {
            Ok(collator) => Some(collator),
            Err(e) => {
                tracing::warn!(error = %e, "collator unavailable, sorting by code point");
                None
            }
        };
        let compare = |a: &str, b: &str| match &collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        };
        if self.sort_ascending {
            self.tasks
                .sort_by(|a, b| compare(&a.description, &b.description));
        } else {
            self.tasks
                .sort_by(|a, b| compare(&b.description, &a.description));
        }
        tracing::debug!(ascending = self.sort_ascending, "sorted tasks");
        self.sort_ascending = !self.sort_ascending;
        self.signal();
    }
}

/// Root-locale collator used to order descriptions: accents and case are
/// secondary and tertiary differences, lowercase sorts before uppercase.
pub fn description_collator() -> Result<Collator, CollatorError> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    options.case_first = Some(CaseFirst::LowerFirst);
    Collator::try_new(&Default::default(), options)
}
