use crate::engine::{TapDance, TapDanceConfig};
use crate::types::Layer;

/// Boot dance tap threshold; high enough that a reboot cannot happen by
/// accident.
pub const BOOT_TAP_THRESHOLD: u8 = 3;

/// The dance registrations matching the layer tables
pub fn default_tap_dances() -> Vec<TapDanceConfig> {
    vec![
        // Single tap moves to extend, double moves to mouse with no delay
        TapDanceConfig::layered(TapDance::ExtMouse, Layer::Extend, Layer::Mouse),
        TapDanceConfig::layered(TapDance::SymFunc, Layer::Symbol, Layer::Function),
        TapDanceConfig::layered(TapDance::NumPad, Layer::Number, Layer::Numpad),
        TapDanceConfig::layered(TapDance::ShiftCtrl, Layer::Shift, Layer::Ctrl),
        TapDanceConfig::layered(TapDance::ShiftCtrlQ, Layer::QwertyShift, Layer::QwertyCtrl),
        TapDanceConfig::boot(TapDance::Boot, BOOT_TAP_THRESHOLD),
    ]
}
