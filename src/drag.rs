//! Drag-and-drop interaction state.
//!
//! The list view feeds pointer events into a [`DragInteraction`] and only a
//! completed drop onto a different item yields a [`ReorderRequest`]. Nothing
//! here knows about terminals or mouse buttons, so the same machine can back
//! any event source.

/// Request to move `source` to the position currently held by `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderRequest {
    pub source: u64,
    pub target: u64,
}

/// Current phase of a single drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A drag started on `source` and has not yet passed over any item.
    Dragging { source: u64 },
    /// The pointer is over `candidate`, which will accept a drop.
    Over { source: u64, candidate: u64 },
}

/// Explicit drag state machine: `Idle -> Dragging -> Over -> Idle`.
#[derive(Debug, Clone, Default)]
pub struct DragInteraction {
    state: DragState,
}

impl DragInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Id of the item being dragged, if any.
    pub fn source(&self) -> Option<u64> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { source } | DragState::Over { source, .. } => Some(source),
        }
    }

    /// Id of the item currently under the pointer during a drag.
    pub fn candidate(&self) -> Option<u64> {
        match self.state {
            DragState::Over { candidate, .. } => Some(candidate),
            _ => None,
        }
    }

    /// Begin dragging `source`. Any gesture already in progress is discarded.
    pub fn start(&mut self, source: u64) {
        tracing::trace!(source, "drag start");
        self.state = DragState::Dragging { source };
    }

    /// Record that the pointer moved over `candidate`. Ignored when idle.
    pub fn over(&mut self, candidate: u64) {
        if let Some(source) = self.source() {
            self.state = DragState::Over { source, candidate };
        }
    }

    /// Pointer left every item while still dragging.
    pub fn leave(&mut self) {
        if let Some(source) = self.source() {
            self.state = DragState::Dragging { source };
        }
    }

    /// Finish the gesture over `target`. Always returns to idle; yields a
    /// request only when a drag was active and the target differs from the
    /// source.
    pub fn drop_on(&mut self, target: u64) -> Option<ReorderRequest> {
        let source = self.source();
        self.state = DragState::Idle;
        match source {
            Some(source) if source != target => Some(ReorderRequest { source, target }),
            _ => None,
        }
    }

    /// Abandon the gesture without producing a request.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::trace!("drag cancelled");
        }
        self.state = DragState::Idle;
    }
}
