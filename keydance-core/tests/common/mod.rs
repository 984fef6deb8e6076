use keydance_core::{
    HostRuntime, KeyCode, Layer, LayerMask, LockLeds, Modifiers, TapDanceEngine,
};

/// One call the engine made into the host, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum HostCall {
    LayerOn(Layer),
    LayerOff(Layer),
    Register(KeyCode),
    Unregister(KeyCode),
    ClearOneShot,
    Reset,
}

/// Test double for the firmware runtime: applies layer/key mutations like
/// the real one and records every call.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub layers: LayerMask,
    pub registered: Vec<KeyCode>,
    pub mods: Modifiers,
    pub oneshot: Modifiers,
    pub leds: LockLeds,
    pub reset_count: u32,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn is_registered(&self, code: KeyCode) -> bool {
        self.registered.contains(&code)
    }
}

impl HostRuntime for RecordingHost {
    fn layer_on(&mut self, layer: Layer) {
        self.layers.activate(layer);
        self.calls.push(HostCall::LayerOn(layer));
    }

    fn layer_off(&mut self, layer: Layer) {
        self.layers.deactivate(layer);
        self.calls.push(HostCall::LayerOff(layer));
    }

    fn register_key(&mut self, code: KeyCode) {
        if !self.registered.contains(&code) {
            self.registered.push(code);
        }
        self.calls.push(HostCall::Register(code));
    }

    fn unregister_key(&mut self, code: KeyCode) {
        self.registered.retain(|held| *held != code);
        self.calls.push(HostCall::Unregister(code));
    }

    fn clear_oneshot_mods(&mut self) {
        self.oneshot.clear();
        self.calls.push(HostCall::ClearOneShot);
    }

    fn reset_device(&mut self) {
        self.reset_count += 1;
        self.calls.push(HostCall::Reset);
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

/// Engine with the default dance registrations
#[allow(dead_code)]
pub fn default_engine() -> TapDanceEngine {
    TapDanceEngine::new(keydance_core::default_tap_dances()).expect("default dances are valid")
}
