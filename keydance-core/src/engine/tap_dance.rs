//! Tap-dance layer selection engine
//!
//! Each dance key resolves to a different layer depending on how many times
//! it is tapped within the runtime's timing window. The runtime counts taps
//! and calls `on_tap` per tap and `on_finished` once per gesture; this
//! engine owns the per-dance action tables and the accumulated count.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::types::Layer;

use super::HostRuntime;

/// Identifiers for the registered dance keys
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapDance {
    /// Single tap holds Extend, double tap adds Mouse
    ExtMouse = 0,
    /// Single tap holds Symbol, double tap adds Function
    SymFunc,
    /// Single tap holds Number, double tap adds Numpad
    NumPad,
    /// Single tap holds Shift, double tap adds Ctrl
    ShiftCtrl,
    /// QWERTY variant of ShiftCtrl
    ShiftCtrlQ,
    /// Three taps reboot the device
    Boot,
}

impl TapDance {
    pub const COUNT: usize = 6;

    pub const ALL: [TapDance; TapDance::COUNT] = [
        TapDance::ExtMouse,
        TapDance::SymFunc,
        TapDance::NumPad,
        TapDance::ShiftCtrl,
        TapDance::ShiftCtrlQ,
        TapDance::Boot,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            TapDance::ExtMouse => "EXT_MOUSE",
            TapDance::SymFunc => "SYM_FUNC",
            TapDance::NumPad => "NUM_PAD",
            TapDance::ShiftCtrl => "SHIFT_CTRL",
            TapDance::ShiftCtrlQ => "SHIFT_CTRL_Q",
            TapDance::Boot => "BOOT",
        }
    }
}

impl FromStr for TapDance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_uppercase();
        TapDance::ALL
            .iter()
            .copied()
            .find(|dance| dance.name() == name)
            .ok_or_else(|| Error::Parse(format!("Unknown tap dance: {:?}", s)))
    }
}

/// Action table for one dance key
#[derive(Debug, Clone)]
pub struct TapDanceConfig {
    pub dance: TapDance,
    /// Layers activated per tap count; index 0 is the single-tap action.
    /// Earlier activations stay on until the gesture finishes.
    pub tap_layers: Vec<Vec<Layer>>,
    /// Layers deactivated when the gesture finishes
    pub finish_layers: Vec<Layer>,
    /// Tap count at which the finish callback reboots the device
    pub boot_threshold: Option<u8>,
}

impl TapDanceConfig {
    /// A dance that selects `primary` on one tap and adds `secondary` on
    /// two; the finish action releases both.
    pub fn layered(dance: TapDance, primary: Layer, secondary: Layer) -> Self {
        Self {
            dance,
            tap_layers: vec![vec![primary], vec![secondary]],
            finish_layers: vec![primary, secondary],
            boot_threshold: None,
        }
    }

    /// A dance with no layer actions that reboots the device once the
    /// gesture accumulates `threshold` taps.
    pub fn boot(dance: TapDance, threshold: u8) -> Self {
        Self {
            dance,
            tap_layers: Vec::new(),
            finish_layers: Vec::new(),
            boot_threshold: Some(threshold),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tap_layers.iter().all(|layers| layers.is_empty()) && self.boot_threshold.is_none() {
            return Err(Error::Dance(format!(
                "Dance {} binds no layers and no boot threshold",
                self.dance.name()
            )));
        }
        for layers in &self.tap_layers {
            for layer in layers {
                if !self.finish_layers.contains(layer) {
                    // A tap action outside the finish set can never be
                    // released and would stay active forever.
                    return Err(Error::Dance(format!(
                        "Dance {} activates {} but never deactivates it",
                        self.dance.name(),
                        layer.display_name()
                    )));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
struct DanceState {
    config: TapDanceConfig,
    /// Highest tap count seen in the current gesture; 0 when idle
    count: u8,
}

/// The tap-dance state machine. One isolated state slot per dance key.
#[derive(Debug)]
pub struct TapDanceEngine {
    dances: [Option<DanceState>; TapDance::COUNT],
}

impl TapDanceEngine {
    /// Build the engine from a set of dance configs. Rejects duplicate
    /// registrations and configs that would leave a layer stuck active.
    pub fn new(configs: Vec<TapDanceConfig>) -> Result<Self> {
        let mut dances: [Option<DanceState>; TapDance::COUNT] = std::array::from_fn(|_| None);
        for config in configs {
            config.validate()?;
            let slot = &mut dances[config.dance.index()];
            if slot.is_some() {
                return Err(Error::Dance(format!(
                    "Dance {} registered twice",
                    config.dance.name()
                )));
            }
            *slot = Some(DanceState { config, count: 0 });
        }
        Ok(Self { dances })
    }

    /// Called by the runtime on each tap within the timing window, with
    /// the tap count so far (starting at 1). Counts beyond the configured
    /// actions are ignored.
    pub fn on_tap(&mut self, dance: TapDance, count: u8, host: &mut impl HostRuntime) {
        if count == 0 {
            return;
        }
        let Some(state) = self.dances[dance.index()].as_mut() else {
            return;
        };
        state.count = state.count.max(count);
        if let Some(layers) = state.config.tap_layers.get(count as usize - 1) {
            for &layer in layers {
                host.layer_on(layer);
            }
        }
    }

    /// Called by the runtime once when the gesture settles (release after
    /// hold, timeout, or interruption by another key). Releases every layer
    /// this dance can activate, fires the boot action if the accumulated
    /// count reached the threshold, and clears the count. Safe to call
    /// again for the same gesture; layer deactivation is idempotent.
    pub fn on_finished(&mut self, dance: TapDance, host: &mut impl HostRuntime) {
        let Some(state) = self.dances[dance.index()].as_mut() else {
            return;
        };
        for &layer in &state.config.finish_layers {
            host.layer_off(layer);
        }
        if let Some(threshold) = state.config.boot_threshold {
            if state.count >= threshold {
                host.reset_device();
            }
        }
        state.count = 0;
    }

    /// Accumulated tap count of the current gesture, 0 when idle
    pub fn tap_count(&self, dance: TapDance) -> u8 {
        self.dances[dance.index()]
            .as_ref()
            .map_or(0, |state| state.count)
    }

    /// Whether a dance id has a registered config
    pub fn is_registered(&self, dance: TapDance) -> bool {
        self.dances[dance.index()].is_some()
    }
}
