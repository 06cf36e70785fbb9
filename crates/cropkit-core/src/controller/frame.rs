//! Per-frame throttling.

/// A single pending recomputation.
///
/// Scheduling replaces whatever is pending, so at most one recomputation per
/// slot runs per animation frame no matter how many move events arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task`, dropping any unexecuted previous one.
    /// Returns true if a pending task was superseded.
    pub fn schedule(&mut self, task: T) -> bool {
        self.pending.replace(task).is_some()
    }

    /// Take the pending task for execution.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
