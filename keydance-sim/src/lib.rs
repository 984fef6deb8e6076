//! Reference host runtime and script replay for the keydance engine
//!
//! The real firmware runtime owns layer state, HID reporting, and
//! tap-dance timing. This crate provides a desk-checkable stand-in:
//! `SimHost` implements the host contract over plain state, and
//! `Simulator` replays scripted key events against the engine, including
//! the tap-dance timing window the firmware would normally drive.

pub mod host;
pub mod label;
pub mod script;

pub use host::SimHost;
pub use label::action_label;
pub use script::{parse_script, Command, Simulator, DEFAULT_TAPPING_TERM_MS};
