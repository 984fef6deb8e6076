//! Table-building macros, so layer tables read like the physical board

/// Plain key action: `k!(KeyA)`
#[macro_export]
macro_rules! k {
    ($code:ident) => {
        $crate::keymap::KeyAction::Key($crate::types::KeyCode::$code)
    };
}

/// Shift-wrapped key action: `s!(KeyA)`
#[macro_export]
macro_rules! s {
    ($code:ident) => {
        $crate::keymap::KeyAction::Shifted($crate::types::KeyCode::$code)
    };
}

/// Ctrl-wrapped key action: `c!(KeyA)`
#[macro_export]
macro_rules! c {
    ($code:ident) => {
        $crate::keymap::KeyAction::Ctrled($crate::types::KeyCode::$code)
    };
}

/// One-shot modifier action: `osm!(LSHIFT)`
#[macro_export]
macro_rules! osm {
    ($mods:ident) => {
        $crate::keymap::KeyAction::OneShot($crate::types::Modifiers::$mods)
    };
}

/// Momentary layer action: `mo!(GamingExtend)`
#[macro_export]
macro_rules! mo {
    ($layer:ident) => {
        $crate::keymap::KeyAction::MomentaryLayer($crate::types::Layer::$layer)
    };
}

/// Toggle layer action: `tg!(Gaming)`
#[macro_export]
macro_rules! tg {
    ($layer:ident) => {
        $crate::keymap::KeyAction::ToggleLayer($crate::types::Layer::$layer)
    };
}

/// Tap-dance action: `td!(ExtMouse)`
#[macro_export]
macro_rules! td {
    ($dance:ident) => {
        $crate::keymap::KeyAction::TapDance($crate::engine::TapDance::$dance)
    };
}

/// Unbound position
#[macro_export]
macro_rules! no {
    () => {
        $crate::keymap::KeyAction::No
    };
}
