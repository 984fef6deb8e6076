use crate::error::{Error, Result};
use std::str::FromStr;

/// Start of the custom keycode block, above every code the host runtime
/// assigns a default binding to.
pub const CUSTOM_RANGE_START: u16 = 0x7E00;

/// Key codes emitted by the keymap tables and forwarded to the host runtime
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Unbound position
    No = 0,

    // Letter keys (A-Z)
    KeyA = 1,
    KeyB = 2,
    KeyC = 3,
    KeyD = 4,
    KeyE = 5,
    KeyF = 6,
    KeyG = 7,
    KeyH = 8,
    KeyI = 9,
    KeyJ = 10,
    KeyK = 11,
    KeyL = 12,
    KeyM = 13,
    KeyN = 14,
    KeyO = 15,
    KeyP = 16,
    KeyQ = 17,
    KeyR = 18,
    KeyS = 19,
    KeyT = 20,
    KeyU = 21,
    KeyV = 22,
    KeyW = 23,
    KeyX = 24,
    KeyY = 25,
    KeyZ = 26,

    // Number row (0-9)
    Key0 = 27,
    Key1 = 28,
    Key2 = 29,
    Key3 = 30,
    Key4 = 31,
    Key5 = 32,
    Key6 = 33,
    Key7 = 34,
    Key8 = 35,
    Key9 = 36,

    // Punctuation
    Minus = 40,
    Equal = 41,
    LeftBracket = 42,
    RightBracket = 43,
    Backslash = 44,
    Semicolon = 45,
    Quote = 46,
    Grave = 47,
    Comma = 48,
    Dot = 49,
    Slash = 50,

    // Pre-shifted symbol aliases
    Exclaim = 60,          // !
    At = 61,               // @
    Hash = 62,             // #
    Dollar = 63,           // $
    Percent = 64,          // %
    Circumflex = 65,       // ^
    Ampersand = 66,        // &
    Asterisk = 67,         // *
    LeftParen = 68,        // (
    RightParen = 69,       // )
    Underscore = 70,       // _
    Plus = 71,             // +
    LeftBrace = 72,        // {
    RightBrace = 73,       // }
    Tilde = 74,            // ~
    Pipe = 75,             // |
    Colon = 76,            // :

    // Whitespace and editing
    Space = 80,
    Enter = 81,
    Tab = 82,
    Escape = 83,
    Backspace = 84,
    Delete = 85,
    Insert = 86,

    // Navigation
    Home = 90,
    End = 91,
    PageUp = 92,
    PageDown = 93,
    Left = 94,
    Down = 95,
    Up = 96,
    Right = 97,

    // Locks and system
    CapsLock = 100,
    NumLock = 101,
    ScrollLock = 102,
    PrintScreen = 103,

    // Function keys
    F1 = 110,
    F2 = 111,
    F3 = 112,
    F4 = 113,
    F5 = 114,
    F6 = 115,
    F7 = 116,
    F8 = 117,
    F9 = 118,
    F10 = 119,
    F11 = 120,
    F12 = 121,

    // Media
    MediaPrev = 130,
    MediaPlayPause = 131,
    MediaNext = 132,

    // Numpad
    Numpad0 = 140,
    Numpad1 = 141,
    Numpad2 = 142,
    Numpad3 = 143,
    Numpad4 = 144,
    Numpad5 = 145,
    Numpad6 = 146,
    Numpad7 = 147,
    Numpad8 = 148,
    Numpad9 = 149,
    NumpadDot = 150,
    NumpadComma = 151,
    NumpadEqual = 152,
    NumpadPlus = 153,
    NumpadMinus = 154,
    NumpadAsterisk = 155,
    NumpadSlash = 156,

    // Modifier keys
    LCtrl = 160,
    LShift = 161,
    LAlt = 162,
    LGui = 163,
    RCtrl = 164,
    RShift = 165,
    RAlt = 166,
    RGui = 167,

    // Mouse movement, wheel, buttons, acceleration tiers
    MouseLeft = 180,
    MouseDown = 181,
    MouseUp = 182,
    MouseRight = 183,
    WheelLeft = 184,
    WheelDown = 185,
    WheelUp = 186,
    WheelRight = 187,
    MouseBtn1 = 188,
    MouseBtn2 = 189,
    MouseBtn3 = 190,
    MouseAccel0 = 191,
    MouseAccel1 = 192,
    MouseAccel2 = 193,

    // Custom keycodes handled by the event dispatcher
    FastMouseLeft = 0x7E00,
    FastMouseUp = 0x7E01,
    FastMouseDown = 0x7E02,
    FastMouseRight = 0x7E03,
    ClearOneShot = 0x7E04,
}

impl KeyCode {
    /// Whether this code lies in the custom block the dispatcher owns
    pub fn is_custom(self) -> bool {
        self as u16 >= CUSTOM_RANGE_START
    }
}

/// Parse a key name as written in simulator scripts, e.g. "A", "F5",
/// "SPACE", "FAST_LEFT".
fn parse_key_name(name: &str) -> Option<KeyCode> {
    use KeyCode::*;

    let key = match name {
        "A" => KeyA,
        "B" => KeyB,
        "C" => KeyC,
        "D" => KeyD,
        "E" => KeyE,
        "F" => KeyF,
        "G" => KeyG,
        "H" => KeyH,
        "I" => KeyI,
        "J" => KeyJ,
        "K" => KeyK,
        "L" => KeyL,
        "M" => KeyM,
        "N" => KeyN,
        "O" => KeyO,
        "P" => KeyP,
        "Q" => KeyQ,
        "R" => KeyR,
        "S" => KeyS,
        "T" => KeyT,
        "U" => KeyU,
        "V" => KeyV,
        "W" => KeyW,
        "X" => KeyX,
        "Y" => KeyY,
        "Z" => KeyZ,

        "0" => Key0,
        "1" => Key1,
        "2" => Key2,
        "3" => Key3,
        "4" => Key4,
        "5" => Key5,
        "6" => Key6,
        "7" => Key7,
        "8" => Key8,
        "9" => Key9,

        "MINUS" => Minus,
        "EQUAL" => Equal,
        "COMMA" => Comma,
        "DOT" | "PERIOD" => Dot,
        "SLASH" => Slash,
        "SEMICOLON" => Semicolon,
        "QUOTE" => Quote,
        "GRAVE" => Grave,

        "SPACE" => Space,
        "ENTER" | "RETURN" => Enter,
        "TAB" => Tab,
        "ESC" | "ESCAPE" => Escape,
        "BACKSPACE" => Backspace,
        "DELETE" | "DEL" => Delete,
        "INSERT" => Insert,

        "HOME" => Home,
        "END" => End,
        "PGUP" | "PAGE_UP" => PageUp,
        "PGDN" | "PAGE_DOWN" => PageDown,
        "LEFT" => Left,
        "DOWN" => Down,
        "UP" => Up,
        "RIGHT" => Right,

        "CAPS" | "CAPS_LOCK" => CapsLock,
        "NUM_LOCK" => NumLock,
        "SCROLL_LOCK" => ScrollLock,
        "PRINT_SCREEN" => PrintScreen,

        "F1" => F1,
        "F2" => F2,
        "F3" => F3,
        "F4" => F4,
        "F5" => F5,
        "F6" => F6,
        "F7" => F7,
        "F8" => F8,
        "F9" => F9,
        "F10" => F10,
        "F11" => F11,
        "F12" => F12,

        "LCTRL" | "LCTL" => LCtrl,
        "LSHIFT" | "LSFT" => LShift,
        "LALT" => LAlt,
        "LGUI" | "LWIN" => LGui,
        "RCTRL" | "RCTL" => RCtrl,
        "RSHIFT" | "RSFT" => RShift,
        "RALT" => RAlt,
        "RGUI" | "RWIN" => RGui,

        "MS_LEFT" => MouseLeft,
        "MS_DOWN" => MouseDown,
        "MS_UP" => MouseUp,
        "MS_RIGHT" => MouseRight,
        "WH_LEFT" => WheelLeft,
        "WH_DOWN" => WheelDown,
        "WH_UP" => WheelUp,
        "WH_RIGHT" => WheelRight,
        "BTN1" => MouseBtn1,
        "BTN2" => MouseBtn2,
        "BTN3" => MouseBtn3,
        "ACCEL0" | "ACL0" => MouseAccel0,
        "ACCEL1" | "ACL1" => MouseAccel1,
        "ACCEL2" | "ACL2" => MouseAccel2,

        "FAST_LEFT" | "MS_FL" => FastMouseLeft,
        "FAST_UP" | "MS_FU" => FastMouseUp,
        "FAST_DOWN" | "MS_FD" => FastMouseDown,
        "FAST_RIGHT" | "MS_FR" => FastMouseRight,
        "CLEAR_OSM" => ClearOneShot,

        _ => return None,
    };
    Some(key)
}

impl FromStr for KeyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_uppercase();
        parse_key_name(&name)
            .ok_or_else(|| Error::Parse(format!("Unknown key name: {:?}", s)))
    }
}

/// Directions a fast-mouse key can move the cursor in
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left = 0,
    Up,
    Down,
    Right,
}

impl Direction {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_and_aliases() {
        assert_eq!("a".parse::<KeyCode>().unwrap(), KeyCode::KeyA);
        assert_eq!("ESC".parse::<KeyCode>().unwrap(), KeyCode::Escape);
        assert_eq!("ms_fl".parse::<KeyCode>().unwrap(), KeyCode::FastMouseLeft);
        assert_eq!("ACL2".parse::<KeyCode>().unwrap(), KeyCode::MouseAccel2);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("NOT_A_KEY".parse::<KeyCode>().is_err());
    }

    #[test]
    fn custom_range_covers_dispatcher_keys() {
        assert!(KeyCode::FastMouseLeft.is_custom());
        assert!(KeyCode::ClearOneShot.is_custom());
        assert!(!KeyCode::MouseAccel2.is_custom());
    }
}
