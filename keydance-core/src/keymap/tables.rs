//! The fourteen layer tables, laid out as on the physical board

use crate::{c, k, mo, no, osm, s, td, tg};

use super::layout::{layout_split_3x5_3, Keymap};

#[rustfmt::skip]
pub const fn default_keymap() -> Keymap {
    [
        // Snth
        layout_split_3x5_3(
            k!(KeyX),    k!(KeyP),    k!(KeyD),    k!(KeyM),    k!(KeyQ),                  k!(Minus),   k!(KeyY),    k!(KeyO),    k!(KeyU),    k!(Quote),
            k!(KeyS),    k!(KeyN),    k!(KeyT),    k!(KeyH),    k!(KeyV),                  k!(KeyG),    k!(KeyC),    k!(KeyA),    k!(KeyE),    k!(KeyI),
            k!(KeyF),    k!(KeyB),    k!(KeyK),    k!(KeyL),    k!(KeyJ),                  k!(KeyZ),    k!(KeyW),    k!(Comma),   k!(Dot),     k!(Slash),
                             td!(ExtMouse), k!(KeyR),  td!(NumPad),       td!(SymFunc), k!(Space),  td!(ShiftCtrl),
        ),
        // Qwerty
        layout_split_3x5_3(
            k!(KeyQ),    k!(KeyW),    k!(KeyE),    k!(KeyR),    k!(KeyT),                  k!(KeyY),    k!(KeyU),    k!(KeyI),    k!(KeyO),    k!(KeyP),
            k!(KeyA),    k!(KeyS),    k!(KeyD),    k!(KeyF),    k!(KeyG),                  k!(KeyH),    k!(KeyJ),    k!(KeyK),    k!(KeyL),    k!(Semicolon),
            k!(KeyZ),    k!(KeyX),    k!(KeyC),    k!(KeyV),    k!(KeyB),                  k!(KeyN),    k!(KeyM),    k!(Comma),   k!(Dot),     k!(Slash),
                             td!(ExtMouse), no!(),     td!(NumPad),       td!(SymFunc), k!(Space),  td!(ShiftCtrlQ),
        ),
        // Shift
        layout_split_3x5_3(
            s!(KeyX),    s!(KeyP),    s!(KeyD),    s!(KeyM),    s!(KeyQ),                  s!(Minus),   s!(KeyY),    s!(KeyO),    s!(KeyU),    s!(Quote),
            s!(KeyS),    s!(KeyN),    s!(KeyT),    s!(KeyH),    s!(KeyV),                  s!(KeyG),    s!(KeyC),    s!(KeyA),    s!(KeyE),    s!(KeyI),
            s!(KeyF),    s!(KeyB),    s!(KeyK),    s!(KeyL),    s!(KeyJ),                  s!(KeyZ),    s!(KeyW),    s!(Comma),   s!(Dot),     s!(Slash),
                             k!(Delete),    s!(KeyR),  k!(Backspace),     no!(),        no!(),      td!(ShiftCtrl),
        ),
        // QwertyShift
        layout_split_3x5_3(
            s!(KeyQ),    s!(KeyW),    s!(KeyE),    s!(KeyR),    s!(KeyT),                  s!(KeyY),    s!(KeyU),    s!(KeyI),    s!(KeyO),    s!(KeyP),
            s!(KeyA),    s!(KeyS),    s!(KeyD),    s!(KeyF),    s!(KeyG),                  s!(KeyH),    s!(KeyJ),    s!(KeyK),    s!(KeyL),    s!(Semicolon),
            s!(KeyZ),    s!(KeyX),    s!(KeyC),    s!(KeyV),    s!(KeyB),                  s!(KeyN),    s!(KeyM),    s!(Comma),   s!(Dot),     s!(Slash),
                             k!(Delete),    no!(),     k!(Backspace),     no!(),        no!(),      td!(ShiftCtrlQ),
        ),
        // Ctrl
        layout_split_3x5_3(
            c!(KeyX),    c!(KeyP),    c!(KeyD),    c!(KeyM),    c!(KeyQ),                  no!(),       c!(KeyY),    c!(KeyO),    c!(KeyU),    c!(Quote),
            c!(KeyS),    c!(KeyN),    c!(KeyT),    c!(KeyH),    c!(KeyV),                  c!(KeyG),    c!(KeyC),    c!(KeyA),    c!(KeyE),    c!(KeyI),
            c!(KeyF),    c!(KeyB),    c!(KeyK),    c!(KeyL),    c!(KeyJ),                  c!(KeyZ),    c!(KeyW),    c!(Comma),   c!(Dot),     c!(Slash),
                             c!(Delete),    c!(KeyR),  c!(Backspace),     no!(),        no!(),      td!(ShiftCtrl),
        ),
        // QwertyCtrl
        layout_split_3x5_3(
            c!(KeyQ),    c!(KeyW),    c!(KeyE),    c!(KeyR),    c!(KeyT),                  c!(KeyY),    c!(KeyU),    c!(KeyI),    c!(KeyO),    c!(KeyP),
            c!(KeyA),    c!(KeyS),    c!(KeyD),    c!(KeyF),    c!(KeyG),                  c!(KeyH),    c!(KeyJ),    c!(KeyK),    c!(KeyL),    c!(Semicolon),
            c!(KeyZ),    c!(KeyX),    c!(KeyC),    c!(KeyV),    c!(KeyB),                  c!(KeyN),    c!(KeyM),    c!(Comma),   c!(Dot),     c!(Slash),
                             no!(),         no!(),     no!(),             no!(),        no!(),      td!(ShiftCtrlQ),
        ),
        // Extend
        layout_split_3x5_3(
            osm!(RALT),  osm!(RSHIFT), osm!(RGUI), osm!(RCTRL), k!(LAlt),                  k!(Home),    k!(PageDown), k!(PageUp), k!(End),     k!(CapsLock),
            osm!(LALT),  osm!(LSHIFT), osm!(LGUI), osm!(LCTRL), osm!(RALT),                k!(Left),    k!(Down),    k!(Up),      k!(Right),   k!(ClearOneShot),
            c!(KeyZ),    c!(KeyX),    c!(KeyC),    c!(KeyV),    k!(LGui),                  no!(),       no!(),       no!(),       k!(Insert),  k!(PrintScreen),
                             td!(ExtMouse), no!(),     no!(),             k!(Escape),   k!(Enter),  k!(Tab),
        ),
        // Symbol
        layout_split_3x5_3(
            k!(Exclaim), k!(At),      k!(Hash),    k!(Dollar),  k!(Percent),               k!(Equal),   k!(Grave),   k!(Ampersand), k!(Pipe),  k!(Minus),
            osm!(LALT),  osm!(LSHIFT), osm!(LGUI), osm!(LCTRL), k!(Circumflex),            k!(Asterisk), k!(LeftParen), k!(LeftBrace), k!(LeftBracket), k!(Underscore),
            no!(),       no!(),       no!(),       no!(),       no!(),                     k!(Tilde),   k!(RightParen), k!(RightBrace), k!(RightBracket), k!(Plus),
                             k!(Semicolon), k!(Colon), k!(Backslash),     td!(SymFunc), no!(),      no!(),
        ),
        // Number
        layout_split_3x5_3(
            k!(Left),    k!(Right),   no!(),       k!(Comma),   k!(NumLock),               k!(Equal),   k!(Key7),    k!(Key8),    k!(Key9),    k!(Minus),
            osm!(LALT),  osm!(LSHIFT), osm!(LGUI), osm!(LCTRL), osm!(RALT),                k!(Asterisk), k!(Key4),   k!(Key5),    k!(Key6),    k!(Plus),
            k!(Down),    k!(Up),      no!(),       no!(),       no!(),                     k!(Space),   k!(Key1),    k!(Key2),    k!(Key3),    k!(Slash),
                             no!(),         no!(),     td!(NumPad),       k!(Backspace), k!(Key0),  k!(Dot),
        ),
        // Numpad
        layout_split_3x5_3(
            k!(Left),    k!(Right),   no!(),       k!(NumpadComma), k!(NumLock),           k!(NumpadEqual), k!(Numpad7), k!(Numpad8), k!(Numpad9), k!(NumpadMinus),
            osm!(LALT),  osm!(LSHIFT), osm!(LGUI), osm!(LCTRL), osm!(RALT),                k!(NumpadAsterisk), k!(Numpad4), k!(Numpad5), k!(Numpad6), k!(NumpadPlus),
            k!(Down),    k!(Up),      no!(),       no!(),       no!(),                     k!(Space),   k!(Numpad1), k!(Numpad2), k!(Numpad3), k!(NumpadSlash),
                             no!(),         no!(),     td!(NumPad),       k!(Backspace), k!(Numpad0), k!(NumpadDot),
        ),
        // Function
        layout_split_3x5_3(
            k!(MediaPrev), k!(MediaPlayPause), k!(MediaNext), c!(F8), no!(),               k!(F1),      k!(F2),      k!(F3),      k!(F4),      k!(ScrollLock),
            osm!(LALT),  osm!(LSHIFT), osm!(LGUI), osm!(LCTRL), no!(),                     k!(F5),      k!(F6),      k!(F7),      k!(F8),      tg!(Qwerty),
            no!(),       no!(),       no!(),       no!(),       no!(),                     k!(F9),      k!(F10),     k!(F11),     k!(F12),     tg!(Gaming),
                             no!(),         no!(),     no!(),             td!(SymFunc), no!(),      td!(Boot),
        ),
        // Mouse
        layout_split_3x5_3(
            no!(),       no!(),       no!(),       no!(),       no!(),                     k!(FastMouseLeft), k!(FastMouseDown), k!(FastMouseUp), k!(FastMouseRight), k!(MouseAccel2),
            k!(LAlt),    k!(LShift),  k!(LGui),    k!(LCtrl),   no!(),                     k!(MouseLeft), k!(MouseDown), k!(MouseUp), k!(MouseRight), k!(MouseAccel1),
            no!(),       no!(),       no!(),       no!(),       no!(),                     k!(WheelLeft), k!(WheelDown), k!(WheelUp), k!(WheelRight), k!(MouseAccel0),
                             td!(ExtMouse), no!(),     no!(),             k!(MouseBtn2), k!(MouseBtn1), k!(MouseBtn3),
        ),
        // Gaming
        layout_split_3x5_3(
            k!(Tab),     k!(KeyQ),    k!(KeyW),    k!(KeyE),    k!(KeyR),                  k!(KeyY),    k!(KeyU),    k!(KeyI),    k!(KeyO),    k!(KeyP),
            k!(LShift),  k!(KeyA),    k!(KeyS),    k!(KeyD),    k!(KeyF),                  k!(KeyH),    k!(KeyJ),    k!(KeyK),    k!(KeyL),    k!(Semicolon),
            k!(LCtrl),   k!(KeyZ),    k!(KeyX),    k!(KeyC),    k!(KeyV),                  k!(KeyN),    k!(KeyM),    k!(Comma),   k!(Dot),     k!(Slash),
                             mo!(GamingExtend), k!(LAlt), k!(Space),      tg!(Gaming),  no!(),      no!(),
        ),
        // GamingExtend
        layout_split_3x5_3(
            k!(Key1),    k!(Key2),    k!(Key3),    k!(Key4),    k!(KeyT),                  no!(),       no!(),       no!(),       no!(),       no!(),
            k!(Key5),    k!(Key6),    k!(Key7),    k!(Key8),    k!(KeyG),                  k!(Left),    k!(Down),    k!(Up),      k!(Right),   no!(),
            k!(Key9),    k!(Key0),    no!(),       k!(Escape),  k!(KeyB),                  no!(),       no!(),       no!(),       no!(),       no!(),
                             no!(),         no!(),     no!(),             k!(Backspace), k!(Enter), k!(Tab),
        ),
    ]
}
