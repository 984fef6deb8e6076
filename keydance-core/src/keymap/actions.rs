use crate::engine::TapDance;
use crate::types::{KeyCode, Layer, Modifiers};

/// What one key position does on one layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Unbound position
    No,
    /// Plain key
    Key(KeyCode),
    /// Key emitted with shift held
    Shifted(KeyCode),
    /// Key emitted with ctrl held
    Ctrled(KeyCode),
    /// One-shot modifier, applies to the next keypress then clears
    OneShot(Modifiers),
    /// Layer active while the key is held
    MomentaryLayer(Layer),
    /// Layer toggled on each press
    ToggleLayer(Layer),
    /// Tap-dance key
    TapDance(TapDance),
}
