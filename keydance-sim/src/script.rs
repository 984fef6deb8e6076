//! Event scripts and their replay
//!
//! A script is one command per line, `#` starts a comment:
//!
//! ```text
//! # double tap into the mouse layer, hold a fast key
//! dance EXT_MOUSE
//! dance EXT_MOUSE
//! press MS_FL
//! status
//! release MS_FL
//! wait 250
//! status
//! ```

use std::str::FromStr;

use keydance_core::{
    default_tap_dances, render_status, Error, EventDispatcher, HostRuntime, KeyCode, KeyEvent,
    Result, TapDance, TapDanceEngine,
};

use crate::host::SimHost;

/// Tap-dance window used when the CLI does not override it
pub const DEFAULT_TAPPING_TERM_MS: u64 = 200;

/// One scripted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Press(KeyCode),
    Release(KeyCode),
    /// One tap of a dance key
    Dance(TapDance),
    /// Force a dance gesture to settle now
    Finish(TapDance),
    /// Advance the clock
    Wait(u64),
    /// Emit the status display
    Status,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| Error::Parse("Empty command".to_string()))?;
        let arg = parts.next();
        if parts.next().is_some() {
            return Err(Error::Parse(format!("Trailing input in command: {:?}", s)));
        }

        let require_arg = || -> Result<&str> {
            arg.ok_or_else(|| Error::Parse(format!("Command {:?} needs an argument", verb)))
        };

        match verb.to_lowercase().as_str() {
            "press" => Ok(Command::Press(require_arg()?.parse()?)),
            "release" => Ok(Command::Release(require_arg()?.parse()?)),
            "dance" => Ok(Command::Dance(require_arg()?.parse()?)),
            "finish" => Ok(Command::Finish(require_arg()?.parse()?)),
            "wait" => {
                let ms = require_arg()?
                    .parse::<u64>()
                    .map_err(|_| Error::Parse("wait needs a millisecond count".to_string()))?;
                Ok(Command::Wait(ms))
            }
            "status" => {
                if arg.is_some() {
                    return Err(Error::Parse("status takes no argument".to_string()));
                }
                Ok(Command::Status)
            }
            _ => Err(Error::Parse(format!("Unknown command: {:?}", verb))),
        }
    }
}

/// Parse a whole script, reporting the line number on failure
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((before, _)) => before,
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        let command = line
            .parse()
            .map_err(|e| Error::Parse(format!("line {}: {}", index + 1, e)))?;
        commands.push(command);
    }
    Ok(commands)
}

/// A dance gesture the runtime is still counting taps for
#[derive(Debug, Clone, Copy)]
struct PendingGesture {
    dance: TapDance,
    count: u8,
    deadline_ms: u64,
}

/// Replays commands against the engine, driving the timing the firmware
/// runtime would normally own: taps inside the window grow the count, a
/// window elapse or a foreign key press settles the gesture.
pub struct Simulator {
    host: SimHost,
    dispatcher: EventDispatcher,
    dances: TapDanceEngine,
    pending: Option<PendingGesture>,
    clock_ms: u64,
    tapping_term_ms: u64,
}

impl Simulator {
    pub fn new(tapping_term_ms: u64) -> Result<Self> {
        Ok(Self {
            host: SimHost::new(),
            dispatcher: EventDispatcher::new(),
            dances: TapDanceEngine::new(default_tap_dances())?,
            pending: None,
            clock_ms: 0,
            tapping_term_ms,
        })
    }

    pub fn host(&self) -> &SimHost {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut SimHost {
        &mut self.host
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    /// Run one command; `Status` yields the rendered display block
    pub fn step(&mut self, command: &Command) -> Option<String> {
        match *command {
            Command::Wait(ms) => {
                self.clock_ms += ms;
                self.expire_pending();
                None
            }
            Command::Dance(dance) => {
                self.expire_pending();
                let count = match self.pending {
                    Some(pending) if pending.dance == dance => pending.count + 1,
                    Some(_) => {
                        self.settle_pending();
                        1
                    }
                    None => 1,
                };
                self.dances.on_tap(dance, count, &mut self.host);
                self.pending = Some(PendingGesture {
                    dance,
                    count,
                    deadline_ms: self.clock_ms + self.tapping_term_ms,
                });
                None
            }
            Command::Finish(dance) => {
                if matches!(self.pending, Some(pending) if pending.dance == dance) {
                    self.pending = None;
                }
                self.dances.on_finished(dance, &mut self.host);
                None
            }
            Command::Press(code) => {
                // Any other key press settles an in-flight gesture first
                self.settle_pending();
                let outcome = self.dispatcher.process(KeyEvent::press(code), &mut self.host);
                if !outcome.is_handled() {
                    self.host.register_key(code);
                }
                None
            }
            Command::Release(code) => {
                let outcome = self
                    .dispatcher
                    .process(KeyEvent::release(code), &mut self.host);
                if !outcome.is_handled() {
                    self.host.unregister_key(code);
                }
                None
            }
            Command::Status => Some(render_status(&self.host)),
        }
    }

    /// Replay a whole script; returns the status blocks it produced
    pub fn run(&mut self, commands: &[Command]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|command| self.step(command))
            .collect()
    }

    /// Settle the pending gesture if its window has elapsed
    fn expire_pending(&mut self) {
        if matches!(self.pending, Some(pending) if pending.deadline_ms <= self.clock_ms) {
            self.settle_pending();
        }
    }

    fn settle_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.dances.on_finished(pending.dance, &mut self.host);
        }
    }
}
