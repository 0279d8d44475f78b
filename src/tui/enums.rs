//! Enumerations for TUI state management.

/// Which part of the screen receives key presses.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Focus {
    /// Typing edits the task description field.
    #[default]
    Input,
    /// Keys act on the list: selection, delete, reorder, sort.
    List,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        }
    }
}

/// Clickable top-level controls outside the list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Control {
    Input,
    Add,
    Sort,
    Dismiss,
}

/// What a mouse event inside the list container landed on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ListHit {
    /// The text part of a row.
    Item(u64),
    /// The delete control of a row.
    Delete(u64),
}

impl ListHit {
    /// Id of the row that was hit, whichever part of it.
    pub fn id(self) -> u64 {
        match self {
            ListHit::Item(id) | ListHit::Delete(id) => id,
        }
    }
}
