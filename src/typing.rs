// Typewriter state machine: type one char per tick, hold the full string,
// delete one char per tick, advance cyclically through the role list.
// The controller owns its deadline so the page can tear the loop down.

use crate::types::{Timestamp, TypingSettings};

/// Current direction of the typewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// Text to display after a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingFrame {
    pub text: String,
}

/// Timer-driven typewriter over a fixed, cyclic role list.
pub struct TypingAnimator {
    roles: Vec<String>,
    settings: TypingSettings,
    role_index: usize,
    char_index: usize,
    phase: Phase,
    next_due: Option<Timestamp>,
}

impl TypingAnimator {
    pub fn new(roles: Vec<String>, settings: TypingSettings) -> Self {
        TypingAnimator {
            roles,
            settings,
            role_index: 0,
            char_index: 0,
            phase: Phase::Typing,
            next_due: None,
        }
    }

    /// Arm the animator: the first tick fires `start_delay_ms` after `now`.
    /// A no-op when the role list is empty.
    pub fn start(&mut self, now: Timestamp) {
        if self.roles.is_empty() {
            return;
        }
        self.role_index = 0;
        self.char_index = 0;
        self.phase = Phase::Typing;
        self.next_due = Some(now.offset_by(self.settings.start_delay_ms));
    }

    /// Disarm the animator; no further ticks fire until `start` again.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.next_due
    }

    /// Advance one step if the pending deadline has passed. Returns the
    /// text to display, or `None` when nothing is due.
    pub fn tick(&mut self, now: Timestamp) -> Option<TypingFrame> {
        let due = self.next_due?;
        if now < due {
            return None;
        }
        let (text, delay) = self.advance();
        self.next_due = Some(now.offset_by(delay));
        Some(TypingFrame { text })
    }

    /// Widest role, in chars, for the desktop layout lock.
    pub fn min_width_ch(&self) -> usize {
        self.roles
            .iter()
            .map(|role| role.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn settings(&self) -> &TypingSettings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// One state-machine step: mutate the char offset, then resolve phase
    /// transitions and the delay to the next step.
    fn advance(&mut self) -> (String, u64) {
        let role = &self.roles[self.role_index];
        let len = role.chars().count();

        let mut delay = match self.phase {
            Phase::Typing => {
                // Offsets count chars so multi-byte roles never split.
                self.char_index = (self.char_index + 1).min(len);
                self.settings.type_delay_ms
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                self.settings.delete_delay_ms
            }
        };

        let shown: String = role.chars().take(self.char_index).collect();

        if self.phase == Phase::Typing && self.char_index == len {
            self.phase = Phase::Deleting;
            delay = self.settings.hold_delay_ms;
        } else if self.phase == Phase::Deleting && self.char_index == 0 {
            self.phase = Phase::Typing;
            self.role_index = (self.role_index + 1) % self.roles.len();
            delay = self.settings.advance_delay_ms;
        }

        (shown, delay)
    }
}
