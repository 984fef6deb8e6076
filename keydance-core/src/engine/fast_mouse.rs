//! Fast-mouse acceleration latches
//!
//! Holding any directional fast-mouse key keeps the top acceleration tier
//! registered; the tier is released only when the last held key goes up.

use crate::types::{Direction, KeyCode};

use super::HostRuntime;

/// Per-direction latch set driving the shared acceleration key
#[derive(Debug, Clone, Default)]
pub struct FastMouseAccel {
    latches: [bool; Direction::COUNT],
}

impl FastMouseAccel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a direction and assert the acceleration tier. Re-asserting an
    /// already registered key is a no-op on the host side.
    pub fn engage(&mut self, direction: Direction, host: &mut impl HostRuntime) {
        self.latches[direction.index()] = true;
        host.register_key(KeyCode::MouseAccel2);
    }

    /// Unlatch a direction; drop the acceleration tier once no direction
    /// is held. Tolerates a release with no preceding engage.
    pub fn release(&mut self, direction: Direction, host: &mut impl HostRuntime) {
        self.latches[direction.index()] = false;
        if self.latches.iter().all(|latched| !latched) {
            host.unregister_key(KeyCode::MouseAccel2);
        }
    }

    /// Whether any direction currently holds the acceleration tier
    pub fn is_engaged(&self) -> bool {
        self.latches.iter().any(|latched| *latched)
    }

    pub fn is_latched(&self, direction: Direction) -> bool {
        self.latches[direction.index()]
    }
}
