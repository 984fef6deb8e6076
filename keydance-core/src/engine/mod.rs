//! Keydance engine - tap-dance layer selection and fast-mouse acceleration
//!
//! This module provides the event-driven core invoked by the host firmware
//! runtime: the tap-dance engine that drives layer activation, the
//! fast-mouse accelerator, and the dispatcher that classifies raw key
//! events.

mod dispatcher;
mod fast_mouse;
mod input;
mod output;
mod runtime;
mod tap_dance;

pub use dispatcher::EventDispatcher;
pub use fast_mouse::FastMouseAccel;
pub use input::KeyEvent;
pub use output::DispatchOutcome;
pub use runtime::HostRuntime;
pub use tap_dance::{TapDance, TapDanceConfig, TapDanceEngine};

// Re-export error types
pub use crate::error::{Error, Result};
