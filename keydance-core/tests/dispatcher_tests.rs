mod common;

use common::*;
use keydance_core::{
    DispatchOutcome, EventDispatcher, KeyCode, KeyEvent, Modifiers,
};
use pretty_assertions::assert_eq;

#[test]
fn fast_mouse_press_registers_move_and_accel() {
    let mut dispatcher = EventDispatcher::new();
    let mut host = RecordingHost::new();

    let outcome = dispatcher.process(KeyEvent::press(KeyCode::FastMouseLeft), &mut host);
    assert_eq!(outcome, DispatchOutcome::Handled);
    assert!(host.is_registered(KeyCode::MouseAccel2));
    assert!(host.is_registered(KeyCode::MouseLeft));
}

#[test]
fn fast_mouse_release_unregisters_move_and_accel() {
    let mut dispatcher = EventDispatcher::new();
    let mut host = RecordingHost::new();

    dispatcher.process(KeyEvent::press(KeyCode::FastMouseUp), &mut host);
    dispatcher.process(KeyEvent::release(KeyCode::FastMouseUp), &mut host);

    assert!(!host.is_registered(KeyCode::MouseUp));
    assert!(!host.is_registered(KeyCode::MouseAccel2));
    assert!(!dispatcher.fast_mouse().is_engaged());
}

#[test]
fn accel_survives_until_last_fast_key_release() {
    let mut dispatcher = EventDispatcher::new();
    let mut host = RecordingHost::new();

    dispatcher.process(KeyEvent::press(KeyCode::FastMouseLeft), &mut host);
    dispatcher.process(KeyEvent::press(KeyCode::FastMouseUp), &mut host);
    dispatcher.process(KeyEvent::release(KeyCode::FastMouseLeft), &mut host);

    // LEFT released but UP still held
    assert!(!host.is_registered(KeyCode::MouseLeft));
    assert!(host.is_registered(KeyCode::MouseUp));
    assert!(host.is_registered(KeyCode::MouseAccel2));

    dispatcher.process(KeyEvent::release(KeyCode::FastMouseUp), &mut host);
    assert!(!host.is_registered(KeyCode::MouseAccel2));
}

#[test]
fn clear_oneshot_fires_on_press_only() {
    let mut dispatcher = EventDispatcher::new();
    let mut host = RecordingHost::new();
    host.oneshot = Modifiers::LSHIFT;

    let outcome = dispatcher.process(KeyEvent::release(KeyCode::ClearOneShot), &mut host);
    assert_eq!(outcome, DispatchOutcome::Handled);
    assert_eq!(host.oneshot, Modifiers::LSHIFT);

    let outcome = dispatcher.process(KeyEvent::press(KeyCode::ClearOneShot), &mut host);
    assert_eq!(outcome, DispatchOutcome::Handled);
    assert!(host.oneshot.is_empty());
}

#[test]
fn other_keys_pass_through_untouched() {
    let mut dispatcher = EventDispatcher::new();
    let mut host = RecordingHost::new();

    for event in [
        KeyEvent::press(KeyCode::KeyA),
        KeyEvent::release(KeyCode::KeyA),
        KeyEvent::press(KeyCode::MouseAccel2),
        KeyEvent::press(KeyCode::Space),
    ] {
        assert_eq!(dispatcher.process(event, &mut host), DispatchOutcome::PassThrough);
    }
    assert!(host.calls.is_empty());
    assert!(!dispatcher.fast_mouse().is_engaged());
}
