use crate::types::Layer;

use super::KeyAction;

pub const MATRIX_ROWS: usize = 4;
pub const MATRIX_COLS: usize = 10;

/// One layer's key actions in matrix order
pub type LayerKeymap = [[KeyAction; MATRIX_COLS]; MATRIX_ROWS];

/// The full keymap, indexed by `Layer::index()`
pub type Keymap = [LayerKeymap; Layer::COUNT];

/// Arranges the split 3x5+3 positions into the scan matrix: three finger
/// rows of five per side, then six thumb keys centered on the bottom row.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub const fn layout_split_3x5_3(
    k00: KeyAction, k01: KeyAction, k02: KeyAction, k03: KeyAction, k04: KeyAction,
    k05: KeyAction, k06: KeyAction, k07: KeyAction, k08: KeyAction, k09: KeyAction,
    k10: KeyAction, k11: KeyAction, k12: KeyAction, k13: KeyAction, k14: KeyAction,
    k15: KeyAction, k16: KeyAction, k17: KeyAction, k18: KeyAction, k19: KeyAction,
    k20: KeyAction, k21: KeyAction, k22: KeyAction, k23: KeyAction, k24: KeyAction,
    k25: KeyAction, k26: KeyAction, k27: KeyAction, k28: KeyAction, k29: KeyAction,
    t0: KeyAction, t1: KeyAction, t2: KeyAction,
    t3: KeyAction, t4: KeyAction, t5: KeyAction,
) -> LayerKeymap {
    [
        [k00, k01, k02, k03, k04, k05, k06, k07, k08, k09],
        [k10, k11, k12, k13, k14, k15, k16, k17, k18, k19],
        [k20, k21, k22, k23, k24, k25, k26, k27, k28, k29],
        [
            KeyAction::No, KeyAction::No, t0, t1, t2,
            t3, t4, t5, KeyAction::No, KeyAction::No,
        ],
    ]
}
