mod common;

use common::*;
use keydance_core::{Error, Layer, TapDance, TapDanceConfig, TapDanceEngine};
use pretty_assertions::assert_eq;

#[test]
fn single_tap_layer_is_released_on_finish() {
    let mut engine = default_engine();
    let mut host = RecordingHost::new();

    engine.on_tap(TapDance::ExtMouse, 1, &mut host);
    assert!(host.layers.is_active(Layer::Extend));

    engine.on_finished(TapDance::ExtMouse, &mut host);
    assert!(!host.layers.is_active(Layer::Extend));
    assert!(host.layers.is_empty());
}

#[test]
fn double_tap_adds_secondary_without_reversing_primary() {
    let mut engine = default_engine();
    let mut host = RecordingHost::new();

    engine.on_tap(TapDance::ExtMouse, 1, &mut host);
    engine.on_tap(TapDance::ExtMouse, 2, &mut host);

    // Both stay on until the gesture finishes; Mouse wins by ordinal
    assert!(host.layers.is_active(Layer::Extend));
    assert!(host.layers.is_active(Layer::Mouse));
    assert_eq!(host.layers.highest_active(), Layer::Mouse);

    engine.on_finished(TapDance::ExtMouse, &mut host);
    assert!(host.layers.is_empty());
}

#[test]
fn taps_beyond_configuration_are_ignored() {
    let mut engine = default_engine();
    let mut host = RecordingHost::new();

    engine.on_tap(TapDance::SymFunc, 1, &mut host);
    engine.on_tap(TapDance::SymFunc, 2, &mut host);
    let calls_before = host.calls.len();

    engine.on_tap(TapDance::SymFunc, 3, &mut host);
    engine.on_tap(TapDance::SymFunc, 4, &mut host);
    assert_eq!(host.calls.len(), calls_before);

    engine.on_finished(TapDance::SymFunc, &mut host);
    assert!(host.layers.is_empty());
}

#[test]
fn dances_keep_isolated_state() {
    let mut engine = default_engine();
    let mut host = RecordingHost::new();

    engine.on_tap(TapDance::ExtMouse, 1, &mut host);
    engine.on_tap(TapDance::SymFunc, 1, &mut host);
    assert!(host.layers.is_active(Layer::Extend));
    assert!(host.layers.is_active(Layer::Symbol));

    engine.on_finished(TapDance::ExtMouse, &mut host);
    assert!(!host.layers.is_active(Layer::Extend));
    assert!(host.layers.is_active(Layer::Symbol));

    engine.on_finished(TapDance::SymFunc, &mut host);
    assert!(host.layers.is_empty());
}

#[test]
fn double_finish_is_harmless() {
    let mut engine = default_engine();
    let mut host = RecordingHost::new();

    engine.on_tap(TapDance::NumPad, 1, &mut host);
    engine.on_finished(TapDance::NumPad, &mut host);
    engine.on_finished(TapDance::NumPad, &mut host);

    assert!(host.layers.is_empty());
    assert_eq!(host.reset_count, 0);
}

#[test]
fn boot_dance_below_threshold_does_not_reset() {
    let mut engine = default_engine();
    let mut host = RecordingHost::new();

    engine.on_tap(TapDance::Boot, 1, &mut host);
    engine.on_finished(TapDance::Boot, &mut host);
    assert_eq!(host.reset_count, 0);

    engine.on_tap(TapDance::Boot, 1, &mut host);
    engine.on_tap(TapDance::Boot, 2, &mut host);
    engine.on_finished(TapDance::Boot, &mut host);
    assert_eq!(host.reset_count, 0);
}

#[test]
fn boot_dance_at_threshold_resets_once_per_finish() {
    let mut engine = default_engine();
    let mut host = RecordingHost::new();

    for count in 1..=3 {
        engine.on_tap(TapDance::Boot, count, &mut host);
    }
    assert_eq!(host.reset_count, 0);

    engine.on_finished(TapDance::Boot, &mut host);
    assert_eq!(host.reset_count, 1);
}

#[test]
fn boot_count_clears_after_finish() {
    let mut engine = default_engine();
    let mut host = RecordingHost::new();

    for count in 1..=4 {
        engine.on_tap(TapDance::Boot, count, &mut host);
    }
    engine.on_finished(TapDance::Boot, &mut host);
    assert_eq!(host.reset_count, 1);

    // The stale count must not leak into the next gesture
    engine.on_finished(TapDance::Boot, &mut host);
    assert_eq!(host.reset_count, 1);

    engine.on_tap(TapDance::Boot, 1, &mut host);
    engine.on_finished(TapDance::Boot, &mut host);
    assert_eq!(host.reset_count, 1);
}

#[test]
fn rejects_config_that_would_leave_a_layer_stuck() {
    let config = TapDanceConfig {
        dance: TapDance::ExtMouse,
        tap_layers: vec![vec![Layer::Extend]],
        finish_layers: vec![],
        boot_threshold: None,
    };
    let err = TapDanceEngine::new(vec![config]).unwrap_err();
    assert!(matches!(err, Error::Dance(_)));
}

#[test]
fn rejects_duplicate_registration() {
    let configs = vec![
        TapDanceConfig::layered(TapDance::ExtMouse, Layer::Extend, Layer::Mouse),
        TapDanceConfig::layered(TapDance::ExtMouse, Layer::Symbol, Layer::Function),
    ];
    let err = TapDanceEngine::new(configs).unwrap_err();
    assert!(matches!(err, Error::Dance(_)));
}

#[test]
fn rejects_dance_with_no_actions() {
    let config = TapDanceConfig {
        dance: TapDance::Boot,
        tap_layers: vec![],
        finish_layers: vec![],
        boot_threshold: None,
    };
    let err = TapDanceEngine::new(vec![config]).unwrap_err();
    assert!(matches!(err, Error::Dance(_)));
}

#[test]
fn unregistered_dance_is_a_no_op() {
    let configs = vec![TapDanceConfig::layered(
        TapDance::ExtMouse,
        Layer::Extend,
        Layer::Mouse,
    )];
    let mut engine = TapDanceEngine::new(configs).unwrap();
    let mut host = RecordingHost::new();

    engine.on_tap(TapDance::Boot, 3, &mut host);
    engine.on_finished(TapDance::Boot, &mut host);
    assert!(host.calls.is_empty());
}
