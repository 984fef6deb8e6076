//! Status display rendering
//!
//! Produces the text shown on the master half's OLED: the effective layer,
//! the lock LEDs, and the held or pending modifiers. Pure functions over
//! the host's read-only queries; pushing the text to a display driver is
//! the host's job.

use crate::engine::HostRuntime;

/// Render the full status block: layer line, lock line, modifier line.
pub fn render_status(host: &impl HostRuntime) -> String {
    let mut out = String::new();

    out.push_str(host.highest_active_layer().display_name());
    out.push('\n');

    let leds = host.lock_leds();
    out.push_str(if leds.num_lock { "NUM " } else { "    " });
    out.push_str(if leds.caps_lock { "CAP " } else { "    " });
    out.push_str(if leds.scroll_lock { "SCR " } else { "    " });
    out.push('\n');

    // One-shot modifiers show the same as held ones
    let mods = host.mods().union(host.oneshot_mods());
    out.push_str(if mods.has_alt() { "ALT " } else { "    " });
    out.push_str(if mods.has_shift() { "SFT " } else { "    " });
    out.push_str(if mods.has_gui() { "SUP " } else { "    " });
    out.push_str(if mods.has_ctrl() { "CTR " } else { "    " });

    out
}
