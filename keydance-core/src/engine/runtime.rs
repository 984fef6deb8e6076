//! The contract the host firmware runtime provides to this engine

use crate::types::{KeyCode, Layer, LockLeds, Modifiers};

/// Services owned by the host firmware runtime.
///
/// The runtime owns the layer stack, HID reporting, one-shot modifier
/// bookkeeping, and all timing; the engine reaches back into it through
/// this trait and never blocks inside a callback. `layer_on`, `layer_off`,
/// `register_key` and `unregister_key` must be idempotent.
pub trait HostRuntime {
    /// Activate a layer on the runtime's layer stack
    fn layer_on(&mut self, layer: Layer);

    /// Deactivate a layer on the runtime's layer stack
    fn layer_off(&mut self, layer: Layer);

    /// Start emitting a key in the HID report
    fn register_key(&mut self, code: KeyCode);

    /// Stop emitting a key in the HID report
    fn unregister_key(&mut self, code: KeyCode);

    /// Drop any pending one-shot modifiers
    fn clear_oneshot_mods(&mut self);

    /// Reboot the device. Irreversible; only the boot dance calls this.
    fn reset_device(&mut self);

    /// Highest active layer, for the status display
    fn highest_active_layer(&self) -> Layer;

    /// Lock-indicator LED state, for the status display
    fn lock_leds(&self) -> LockLeds;

    /// Currently held modifiers
    fn mods(&self) -> Modifiers;

    /// Pending one-shot modifiers
    fn oneshot_mods(&self) -> Modifiers;
}
