//! Event dispatcher for custom keycodes
//!
//! Classifies each raw key event exactly once at this boundary; nothing
//! downstream re-inspects numeric codes. Every event is resolved within
//! the same call.

use crate::types::{Direction, KeyCode};

use super::{DispatchOutcome, FastMouseAccel, HostRuntime, KeyEvent};

/// The custom keycodes this engine owns, classified from a raw code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CustomKey {
    FastMouse(Direction),
    ClearOneShot,
}

impl CustomKey {
    fn classify(code: KeyCode) -> Option<CustomKey> {
        match code {
            KeyCode::FastMouseLeft => Some(CustomKey::FastMouse(Direction::Left)),
            KeyCode::FastMouseUp => Some(CustomKey::FastMouse(Direction::Up)),
            KeyCode::FastMouseDown => Some(CustomKey::FastMouse(Direction::Down)),
            KeyCode::FastMouseRight => Some(CustomKey::FastMouse(Direction::Right)),
            KeyCode::ClearOneShot => Some(CustomKey::ClearOneShot),
            _ => None,
        }
    }
}

/// Plain movement key forwarded alongside a fast-mouse key
fn mouse_move_key(direction: Direction) -> KeyCode {
    match direction {
        Direction::Left => KeyCode::MouseLeft,
        Direction::Up => KeyCode::MouseUp,
        Direction::Down => KeyCode::MouseDown,
        Direction::Right => KeyCode::MouseRight,
    }
}

/// Routes raw key events to the fast-mouse accelerator and the one-shot
/// clear action; everything else passes through to the runtime's default
/// binding lookup.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    fast_mouse: FastMouseAccel,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process(&mut self, event: KeyEvent, host: &mut impl HostRuntime) -> DispatchOutcome {
        match CustomKey::classify(event.code) {
            Some(CustomKey::FastMouse(direction)) => {
                if event.pressed {
                    self.fast_mouse.engage(direction, host);
                    host.register_key(mouse_move_key(direction));
                } else {
                    self.fast_mouse.release(direction, host);
                    host.unregister_key(mouse_move_key(direction));
                }
                DispatchOutcome::Handled
            }
            Some(CustomKey::ClearOneShot) => {
                if event.pressed {
                    host.clear_oneshot_mods();
                }
                DispatchOutcome::Handled
            }
            None => DispatchOutcome::PassThrough,
        }
    }

    /// Accelerator state, exposed for the status display and tests
    pub fn fast_mouse(&self) -> &FastMouseAccel {
        &self.fast_mouse
    }
}
