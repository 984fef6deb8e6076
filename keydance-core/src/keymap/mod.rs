//! Static keymap configuration: the key-action vocabulary, the split
//! 3x5+3 layout arrangement, the per-layer tables, and the tap-dance
//! registrations.

mod actions;
mod dances;
mod layout;
mod macros;
mod tables;

pub use actions::KeyAction;
pub use dances::{default_tap_dances, BOOT_TAP_THRESHOLD};
pub use layout::{layout_split_3x5_3, Keymap, LayerKeymap, MATRIX_COLS, MATRIX_ROWS};
pub use tables::default_keymap;
