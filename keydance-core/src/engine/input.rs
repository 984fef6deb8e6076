//! Input representation for the event dispatcher

use crate::types::KeyCode;

/// A raw key event as delivered by the host runtime's matrix scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Key code for this matrix position
    pub code: KeyCode,
    /// true on press, false on release
    pub pressed: bool,
}

impl KeyEvent {
    pub fn new(code: KeyCode, pressed: bool) -> Self {
        Self { code, pressed }
    }

    pub fn press(code: KeyCode) -> Self {
        Self::new(code, true)
    }

    pub fn release(code: KeyCode) -> Self {
        Self::new(code, false)
    }
}
