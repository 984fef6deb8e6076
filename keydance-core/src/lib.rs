pub mod types;
pub mod error;
pub mod engine;
pub mod keymap;
pub mod display;

pub use types::*;

// Re-export commonly used types
pub use error::{Error, Result};
pub use engine::{
    DispatchOutcome, EventDispatcher, FastMouseAccel, HostRuntime, KeyEvent, TapDance,
    TapDanceConfig, TapDanceEngine,
};
pub use keymap::{default_keymap, default_tap_dances, KeyAction, Keymap, LayerKeymap};
pub use display::render_status;
