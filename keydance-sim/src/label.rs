//! Compact labels for keymap dumps

use keydance_core::{KeyAction, Modifiers};

fn mod_label(mods: Modifiers) -> &'static str {
    match mods {
        m if m == Modifiers::LCTRL => "LCTL",
        m if m == Modifiers::LSHIFT => "LSFT",
        m if m == Modifiers::LALT => "LALT",
        m if m == Modifiers::LGUI => "LGUI",
        m if m == Modifiers::RCTRL => "RCTL",
        m if m == Modifiers::RSHIFT => "RSFT",
        m if m == Modifiers::RALT => "RALT",
        m if m == Modifiers::RGUI => "RGUI",
        _ => "MODS",
    }
}

/// Short cell text for one key action
pub fn action_label(action: &KeyAction) -> String {
    match action {
        KeyAction::No => "----".to_string(),
        KeyAction::Key(code) => format!("{:?}", code),
        KeyAction::Shifted(code) => format!("S({:?})", code),
        KeyAction::Ctrled(code) => format!("C({:?})", code),
        KeyAction::OneShot(mods) => format!("OSM({})", mod_label(*mods)),
        KeyAction::MomentaryLayer(layer) => format!("MO({})", layer.display_name()),
        KeyAction::ToggleLayer(layer) => format!("TG({})", layer.display_name()),
        KeyAction::TapDance(dance) => format!("TD({})", dance.name()),
    }
}
