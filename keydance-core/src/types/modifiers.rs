/// Modifier bitmask as reported by the host runtime: one bit per physical
/// modifier, left hand in the low nibble, right hand in the high nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);

    pub const LCTRL: Modifiers = Modifiers(1 << 0);
    pub const LSHIFT: Modifiers = Modifiers(1 << 1);
    pub const LALT: Modifiers = Modifiers(1 << 2);
    pub const LGUI: Modifiers = Modifiers(1 << 3);
    pub const RCTRL: Modifiers = Modifiers(1 << 4);
    pub const RSHIFT: Modifiers = Modifiers(1 << 5);
    pub const RALT: Modifiers = Modifiers(1 << 6);
    pub const RGUI: Modifiers = Modifiers(1 << 7);

    const CTRL_MASK: u8 = 1 << 0 | 1 << 4;
    const SHIFT_MASK: u8 = 1 << 1 | 1 << 5;
    const ALT_MASK: u8 = 1 << 2 | 1 << 6;
    const GUI_MASK: u8 = 1 << 3 | 1 << 7;

    pub fn from_bits(bits: u8) -> Modifiers {
        Modifiers(bits)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Modifiers) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Modifiers) {
        self.0 &= !other.0;
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn has_ctrl(self) -> bool {
        self.0 & Self::CTRL_MASK != 0
    }

    pub fn has_shift(self) -> bool {
        self.0 & Self::SHIFT_MASK != 0
    }

    pub fn has_alt(self) -> bool {
        self.0 & Self::ALT_MASK != 0
    }

    pub fn has_gui(self) -> bool {
        self.0 & Self::GUI_MASK != 0
    }
}

/// Lock-indicator LED state as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockLeds {
    pub num_lock: bool,
    pub caps_lock: bool,
    pub scroll_lock: bool,
}
