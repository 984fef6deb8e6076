use std::collections::HashSet;

use keydance_core::{HostRuntime, KeyCode, Layer, LayerMask, LockLeds, Modifiers};

/// In-memory host runtime: the layer stack, the set of keys currently in
/// the HID report, modifier state, and a journal of every call for
/// verbose replay output.
#[derive(Debug, Default)]
pub struct SimHost {
    layers: LayerMask,
    registered: HashSet<KeyCode>,
    mods: Modifiers,
    oneshot: Modifiers,
    leds: LockLeds,
    reset: bool,
    journal: Vec<String>,
}

impl SimHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_layer_active(&self, layer: Layer) -> bool {
        self.layers.is_active(layer)
    }

    pub fn active_layers(&self) -> LayerMask {
        self.layers
    }

    pub fn is_registered(&self, code: KeyCode) -> bool {
        self.registered.contains(&code)
    }

    pub fn was_reset(&self) -> bool {
        self.reset
    }

    pub fn set_oneshot_mods(&mut self, mods: Modifiers) {
        self.oneshot = mods;
    }

    pub fn set_lock_leds(&mut self, leds: LockLeds) {
        self.leds = leds;
    }

    /// Drain the journal of host calls made since the last drain
    pub fn take_journal(&mut self) -> Vec<String> {
        std::mem::take(&mut self.journal)
    }
}

impl HostRuntime for SimHost {
    fn layer_on(&mut self, layer: Layer) {
        self.layers.activate(layer);
        self.journal.push(format!("layer on {}", layer.display_name()));
    }

    fn layer_off(&mut self, layer: Layer) {
        self.layers.deactivate(layer);
        self.journal.push(format!("layer off {}", layer.display_name()));
    }

    fn register_key(&mut self, code: KeyCode) {
        self.registered.insert(code);
        self.journal.push(format!("register {:?}", code));
    }

    fn unregister_key(&mut self, code: KeyCode) {
        self.registered.remove(&code);
        self.journal.push(format!("unregister {:?}", code));
    }

    fn clear_oneshot_mods(&mut self) {
        self.oneshot.clear();
        self.journal.push("clear one-shot mods".to_string());
    }

    fn reset_device(&mut self) {
        self.reset = true;
        self.journal.push("device reset".to_string());
    }

    fn highest_active_layer(&self) -> Layer {
        self.layers.highest_active()
    }

    fn lock_leds(&self) -> LockLeds {
        self.leds
    }

    fn mods(&self) -> Modifiers {
        self.mods
    }

    fn oneshot_mods(&self) -> Modifiers {
        self.oneshot
    }
}
