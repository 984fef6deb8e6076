use crate::error::{Error, Result};
use std::str::FromStr;

/// Keymap layers in precedence order. The highest active ordinal wins per
/// key position, regardless of activation order.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Base layer
    Snth = 0,
    /// For historical reasons
    Qwerty,
    /// Shifted base
    Shift,
    /// Shifted QWERTY
    QwertyShift,
    /// "Controlled" base
    Ctrl,
    /// "Controlled" QWERTY
    QwertyCtrl,
    /// Navigation, utility, and mods
    Extend,
    /// Symbols
    Symbol,
    /// Numbers
    Number,
    /// Numbers with actual numpad keycodes (e.g. Blender)
    Numpad,
    /// Function keys and layer swaps
    Function,
    /// Mouse keys
    Mouse,
    /// QWERTY right shifted with mods on column 1
    Gaming,
    /// Adds numbers and missing keys
    GamingExtend,
}

impl Layer {
    pub const COUNT: usize = 14;

    pub const ALL: [Layer; Layer::COUNT] = [
        Layer::Snth,
        Layer::Qwerty,
        Layer::Shift,
        Layer::QwertyShift,
        Layer::Ctrl,
        Layer::QwertyCtrl,
        Layer::Extend,
        Layer::Symbol,
        Layer::Number,
        Layer::Numpad,
        Layer::Function,
        Layer::Mouse,
        Layer::Gaming,
        Layer::GamingExtend,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Layer> {
        Layer::ALL.get(index).copied()
    }

    /// Name shown on the status display
    pub fn display_name(self) -> &'static str {
        match self {
            Layer::Snth => "SNTH",
            Layer::Qwerty => "QWERTY",
            Layer::Shift => "SHIFT",
            Layer::QwertyShift => "QWERTY_SHIFT",
            Layer::Ctrl => "CONTROL",
            Layer::QwertyCtrl => "QWERTY_CONTROL",
            Layer::Extend => "EXTEND",
            Layer::Symbol => "SYMBOL",
            Layer::Number => "NUMBER",
            Layer::Numpad => "NUMPAD",
            Layer::Function => "FUNCTION",
            Layer::Mouse => "MOUSE",
            Layer::Gaming => "GAMING",
            Layer::GamingExtend => "GAMING_EXTEND",
        }
    }
}

impl FromStr for Layer {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_uppercase();
        Layer::ALL
            .iter()
            .copied()
            .find(|layer| layer.display_name() == name)
            .ok_or_else(|| Error::Parse(format!("Unknown layer name: {:?}", s)))
    }
}

/// Reference implementation of the runtime's active-layer stack: one bit
/// per layer, the base layer always effective as a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayerMask(u32);

impl LayerMask {
    pub fn new() -> Self {
        LayerMask(0)
    }

    pub fn activate(&mut self, layer: Layer) {
        self.0 |= 1 << layer.index();
    }

    pub fn deactivate(&mut self, layer: Layer) {
        self.0 &= !(1 << layer.index());
    }

    pub fn is_active(self, layer: Layer) -> bool {
        self.0 & (1 << layer.index()) != 0
    }

    /// Highest active layer; the base layer when none is explicitly active
    pub fn highest_active(self) -> Layer {
        let mut highest = Layer::Snth;
        for layer in Layer::ALL {
            if self.is_active(layer) {
                highest = layer;
            }
        }
        highest
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highest_active_follows_ordinal_not_activation_order() {
        let mut mask = LayerMask::new();
        mask.activate(Layer::Mouse);
        mask.activate(Layer::Extend);
        assert_eq!(mask.highest_active(), Layer::Mouse);

        mask.deactivate(Layer::Mouse);
        assert_eq!(mask.highest_active(), Layer::Extend);
    }

    #[test]
    fn empty_mask_falls_back_to_base() {
        assert_eq!(LayerMask::new().highest_active(), Layer::Snth);
    }

    #[test]
    fn deactivate_is_idempotent() {
        let mut mask = LayerMask::new();
        mask.activate(Layer::Symbol);
        mask.deactivate(Layer::Symbol);
        mask.deactivate(Layer::Symbol);
        assert!(mask.is_empty());
    }

    #[test]
    fn layer_names_round_trip() {
        for layer in Layer::ALL {
            assert_eq!(layer.display_name().parse::<Layer>().unwrap(), layer);
        }
    }
}
