use keydance_core::{KeyCode, Layer, TapDance};
use keydance_sim::{parse_script, Command, Simulator, DEFAULT_TAPPING_TERM_MS};
use pretty_assertions::assert_eq;

fn simulator() -> Simulator {
    Simulator::new(DEFAULT_TAPPING_TERM_MS).expect("default dances are valid")
}

#[test]
fn parses_comments_and_blank_lines() {
    let script = "\
# warm up
dance EXT_MOUSE

press ms_fl   # hold a fast key
status
";
    let commands = parse_script(script).unwrap();
    assert_eq!(
        commands,
        vec![
            Command::Dance(TapDance::ExtMouse),
            Command::Press(KeyCode::FastMouseLeft),
            Command::Status,
        ]
    );
}

#[test]
fn reports_the_failing_line() {
    let err = parse_script("dance EXT_MOUSE\nfrobnicate\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn single_tap_gesture_times_out_clean() {
    let mut sim = simulator();
    sim.run(&parse_script("dance EXT_MOUSE\n").unwrap());
    assert!(sim.host().is_layer_active(Layer::Extend));

    sim.run(&parse_script("wait 300\n").unwrap());
    assert!(!sim.host().is_layer_active(Layer::Extend));
    assert!(sim.host().active_layers().is_empty());
}

#[test]
fn double_tap_reaches_the_mouse_layer() {
    let mut sim = simulator();
    sim.run(&parse_script("dance EXT_MOUSE\ndance EXT_MOUSE\n").unwrap());
    assert!(sim.host().is_layer_active(Layer::Extend));
    assert!(sim.host().is_layer_active(Layer::Mouse));

    sim.run(&parse_script("wait 250\n").unwrap());
    assert!(sim.host().active_layers().is_empty());
}

#[test]
fn taps_outside_the_window_are_separate_gestures() {
    let mut sim = simulator();
    sim.run(&parse_script("dance EXT_MOUSE\nwait 250\ndance EXT_MOUSE\n").unwrap());
    // Second tap started a fresh gesture: count 1, so Extend only
    assert!(sim.host().is_layer_active(Layer::Extend));
    assert!(!sim.host().is_layer_active(Layer::Mouse));
}

#[test]
fn foreign_key_press_settles_the_gesture() {
    let mut sim = simulator();
    sim.run(&parse_script("dance EXT_MOUSE\npress A\n").unwrap());
    assert!(!sim.host().is_layer_active(Layer::Extend));
    assert!(sim.host().is_registered(KeyCode::KeyA));
}

#[test]
fn fast_mouse_script_round_trips_the_accel_key() {
    let mut sim = simulator();
    sim.run(&parse_script("press MS_FL\npress MS_FU\nrelease MS_FL\n").unwrap());
    assert!(sim.host().is_registered(KeyCode::MouseAccel2));
    assert!(sim.host().is_registered(KeyCode::MouseUp));
    assert!(!sim.host().is_registered(KeyCode::MouseLeft));

    sim.run(&parse_script("release MS_FU\n").unwrap());
    assert!(!sim.host().is_registered(KeyCode::MouseAccel2));
}

#[test]
fn boot_gesture_resets_the_device() {
    let mut sim = simulator();
    sim.run(&parse_script("dance BOOT\ndance BOOT\nfinish BOOT\n").unwrap());
    assert!(!sim.host().was_reset());

    sim.run(&parse_script("dance BOOT\ndance BOOT\ndance BOOT\nfinish BOOT\n").unwrap());
    assert!(sim.host().was_reset());
}

#[test]
fn status_blocks_come_back_in_order() {
    let mut sim = simulator();
    let outputs = sim.run(&parse_script("status\ndance EXT_MOUSE\ndance EXT_MOUSE\nstatus\n").unwrap());
    assert_eq!(outputs.len(), 2);
    assert!(outputs[0].starts_with("SNTH\n"));
    assert!(outputs[1].starts_with("MOUSE\n"));
}
