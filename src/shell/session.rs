// Session: the owned state one interpreter loop runs against
//
// Everything the interpreter mutates lives here, passed explicitly; there
// are no globals and no reactive re-render hooks. The host calls
// `submit` once per committed line and then reads the transcript tail and
// drains any queued effects.

use crate::shell::gate::{InputEcho, PrivilegeGate};
use crate::shell::interpreter;
use crate::shell::transcript::{Line, Transcript};
use crate::store::TaskStore;
use log::debug;
use std::collections::VecDeque;
use std::time::Duration;

/// Delay before a `reload` restarts the session
pub const RESTART_DELAY: Duration = Duration::from_millis(500);
/// Delay before an elevated `exit` closes the session
pub const CLOSE_DELAY: Duration = Duration::from_millis(800);

/// Fire-and-forget signal to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    Restart,
    Close,
}

/// A scheduled one-shot host signal. Not cancellable: once queued it
/// fires after `delay` regardless of further input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effect {
    pub signal: HostSignal,
    pub delay: Duration,
}

pub struct Session {
    pub(crate) store: TaskStore,
    pub(crate) gate: PrivilegeGate,
    pub(crate) transcript: Transcript,
    effects: VecDeque<Effect>,
}

impl Session {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            gate: PrivilegeGate::new(),
            transcript: Transcript::new(),
            effects: VecDeque::new(),
        }
    }

    /// Process one committed input line to completion.
    ///
    /// While the gate is awaiting confirmation the line is consumed as
    /// the secret and never echoed. Otherwise the line is echoed (blank
    /// lines too, reproducing the prompt) and dispatched unelevated.
    pub fn submit(&mut self, raw: &str) {
        let line = raw.trim().to_string();

        if self.gate.is_awaiting() {
            let pending = self.gate.disarm();
            if self.gate.confirms(&line) {
                debug!("confirmation accepted, replaying deferred command");
                interpreter::process(self, &pending, true);
            } else {
                debug!("confirmation rejected, deferred command dropped");
                self.transcript.push(Line::error("Sorry, try again."));
            }
            return;
        }

        self.transcript.push(Line::command(line.clone()));
        if line.is_empty() {
            return;
        }
        interpreter::process(self, &line, false);
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Append host-authored lines (banner and the like). The host owns
    /// presentation content; the interpreter never produces these.
    pub fn append(&mut self, lines: impl IntoIterator<Item = Line>) {
        self.transcript.extend(lines);
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Echo hint for the host's input affordance (§6: the host masks,
    /// the core only exposes the state)
    pub fn input_echo(&self) -> InputEcho {
        self.gate.input_echo()
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.gate.is_awaiting()
    }

    /// Pop the next pending host effect, if any
    pub fn take_effect(&mut self) -> Option<Effect> {
        self.effects.pop_front()
    }

    pub(crate) fn request_restart(&mut self, delay: Duration) {
        self.effects.push_back(Effect {
            signal: HostSignal::Restart,
            delay,
        });
    }

    pub(crate) fn request_close(&mut self, delay: Duration) {
        self.effects.push_back(Effect {
            signal: HostSignal::Close,
            delay,
        });
    }
}
