//! Held-button tracking for terminal environments.
//!
//! The game needs to know which buttons are *held* (arming takes a five second
//! hold). Terminals that report key release events are handled directly; for
//! the rest, a held key is kept alive by its auto-repeat and released after a
//! timeout with no events.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::engine::ButtonReader;
use crate::map::key_to_button;
use crate::types::{Button, ButtonMask};

// Longer than the usual auto-repeat start delay (~500ms) so a held key does not
// flicker off before repeats begin.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 600;

/// Tracks which board buttons the keyboard is holding down.
#[derive(Debug, Clone)]
pub struct ButtonHandler {
    held: ButtonMask,
    last_key_time: [Instant; 4],
    key_release_timeout_ms: u32,
    /// Set once the terminal has sent a real release event.
    release_events_seen: bool,
}

impl ButtonHandler {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            held: ButtonMask::NONE,
            last_key_time: [now; 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn mask(&self) -> ButtonMask {
        self.held
    }

    /// Key press or auto-repeat. Returns the button if it was not already held.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Button> {
        let button = key_to_button(code)?;
        self.last_key_time[slot(button)] = Instant::now();
        if self.held.contains(button) {
            None
        } else {
            self.held.set(button);
            Some(button)
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.release_events_seen = true;
        if let Some(button) = key_to_button(code) {
            self.held.clear(button);
        }
    }

    /// Expire keys that went quiet. Returns the buttons released by timeout.
    pub fn update(&mut self) -> ArrayVec<Button, 4> {
        let mut released = ArrayVec::<Button, 4>::new();
        if self.release_events_seen {
            return released;
        }

        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        for button in Button::ALL {
            if self.held.contains(button) && self.last_key_time[slot(button)].elapsed() > timeout {
                self.held.clear(button);
                released.push(button);
            }
        }
        released
    }

    pub fn reset(&mut self) {
        self.held = ButtonMask::NONE;
        self.last_key_time = [Instant::now(); 4];
    }
}

impl Default for ButtonHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonReader for ButtonHandler {
    fn read_mask(&mut self) -> ButtonMask {
        for button in self.update() {
            log::trace!("{} auto-released", button.as_str());
        }
        self.held
    }
}

fn slot(button: Button) -> usize {
    (button.id() - 1) as usize
}
