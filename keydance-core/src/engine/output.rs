//! Output representation for the event dispatcher

/// Result of dispatching one key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event was consumed by this engine
    Handled,
    /// Not ours; the runtime should apply its default binding lookup
    PassThrough,
}

impl DispatchOutcome {
    pub fn is_handled(self) -> bool {
        matches!(self, DispatchOutcome::Handled)
    }
}
