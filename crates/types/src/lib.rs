//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, peripheral conductors, terminal rendering).
//!
//! # Board Layout
//!
//! The reflex board has four LEDs and four push buttons. Button `BTN0` sits
//! under LED 1, `BTN1` under LED 2 and so on. Buttons and LEDs are identified
//! by the same 1-based id so a press "matches" a flash when the ids are equal.
//!
//! # Game Timing Constants
//!
//! The state machine is ticked by a fixed-period scheduler. All waits are
//! expressed in ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 1 | Scheduler period |
//! | `FIVE_SECOND_WAIT` | 5000 | Arm hold, button timeout, stats display |
//! | `TWO_SECOND_WAIT` | 2000 | Width and base of the first flash wait |
//! | `ONE_SECOND_WAIT` | 1000 | Base of the wait between flashes |
//!
//! # Examples
//!
//! ```
//! use reflex_test_types::{Button, ButtonMask, GamePhase, SEQUENCE_LENGTH};
//!
//! // Two buttons held at once: the lowest-numbered one wins.
//! let mask = ButtonMask::from_bits(0b0110);
//! assert_eq!(mask.resolve(), Some(Button::Btn1));
//! assert_eq!(Button::Btn1.id(), 2);
//!
//! assert_eq!(GamePhase::default(), GamePhase::Init);
//! assert_eq!(GamePhase::from_str("wait_stats"), Some(GamePhase::WaitStats));
//! assert_eq!(SEQUENCE_LENGTH, 10);
//! ```

/// Scheduler period in milliseconds.
pub const TICK_MS: u32 = 1;

/// Ticks in five seconds.
pub const FIVE_SECOND_WAIT: u32 = 5000 / TICK_MS;

/// Ticks in two seconds.
pub const TWO_SECOND_WAIT: u32 = 2000 / TICK_MS;

/// Ticks in one second.
pub const ONE_SECOND_WAIT: u32 = 1000 / TICK_MS;

/// Number of flashes in one round.
pub const SEQUENCE_LENGTH: usize = 10;

/// Number of LEDs (and buttons) on the board.
pub const NUMBER_OF_LEDS: u8 = 4;

/// Number of entries kept in the high-score table.
pub const NUMBER_OF_HIGH_SCORES: usize = 10;

/// Ceiling response time in seconds.
///
/// High scores and the round minimum start here so any real sample replaces them.
pub const SLOW_RESPONSE_SECS: f64 = 5.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_derived_waits_match_one_millisecond_period() {
        assert_eq!(TICK_MS, 1);
        assert_eq!(FIVE_SECOND_WAIT, 5000);
        assert_eq!(TWO_SECOND_WAIT, 2000);
        assert_eq!(ONE_SECOND_WAIT, 1000);
    }

    #[test]
    fn mask_resolution_prefers_lowest_bit() {
        assert_eq!(ButtonMask::NONE.resolve(), None);
        assert_eq!(ButtonMask::from_bits(0x8).resolve(), Some(Button::Btn3));
        assert_eq!(ButtonMask::from_bits(0xC).resolve(), Some(Button::Btn2));
        assert_eq!(ButtonMask::from_bits(0xF).resolve(), Some(Button::Btn0));
        // Bits above BTN3 are not wired to anything.
        assert_eq!(ButtonMask::from_bits(0xF0).resolve(), None);
    }

    #[test]
    fn mask_set_and_clear_round_trip_per_button() {
        let mut mask = ButtonMask::NONE;
        mask.set(Button::Btn2);
        assert!(mask.contains(Button::Btn2));
        assert_eq!(mask.bits(), 0x4);

        mask.set(Button::Btn0);
        mask.clear(Button::Btn2);
        assert_eq!(mask.bits(), 0x1);
        assert!(!mask.is_empty());

        mask.clear(Button::Btn0);
        assert!(mask.is_empty());
    }

    #[test]
    fn phase_names_are_unique_and_parse_back() {
        for phase in GamePhase::ALL {
            assert_eq!(GamePhase::from_str(phase.as_str()), Some(phase));
        }
        assert_eq!(GamePhase::from_str("bogus"), None);
    }
}

/// The four push buttons, in precedence order.
///
/// - **Btn0**: mask `0x1`, id 1
/// - **Btn1**: mask `0x2`, id 2
/// - **Btn2**: mask `0x4`, id 3
/// - **Btn3**: mask `0x8`, id 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Btn0,
    Btn1,
    Btn2,
    Btn3,
}

impl Button {
    /// All buttons, lowest precedence index first.
    pub const ALL: [Button; 4] = [Button::Btn0, Button::Btn1, Button::Btn2, Button::Btn3];

    /// 1-based id, comparable with a sequence LED id.
    pub fn id(&self) -> u8 {
        match self {
            Button::Btn0 => 1,
            Button::Btn1 => 2,
            Button::Btn2 => 3,
            Button::Btn3 => 4,
        }
    }

    /// Look a button up by its 1-based id.
    ///
    /// # Examples
    ///
    /// ```
    /// use reflex_test_types::Button;
    ///
    /// assert_eq!(Button::from_id(1), Some(Button::Btn0));
    /// assert_eq!(Button::from_id(4), Some(Button::Btn3));
    /// assert_eq!(Button::from_id(0), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Button::Btn0),
            2 => Some(Button::Btn1),
            3 => Some(Button::Btn2),
            4 => Some(Button::Btn3),
            _ => None,
        }
    }

    /// Raw GPIO bit for this button.
    pub fn mask(&self) -> u8 {
        1 << (self.id() - 1)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Btn0 => "btn0",
            Button::Btn1 => "btn1",
            Button::Btn2 => "btn2",
            Button::Btn3 => "btn3",
        }
    }
}

/// Raw pressed-button bitmask as read from the GPIO port.
///
/// Several bits may be set at once; [`ButtonMask::resolve`] reduces the mask to
/// the single button the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const NONE: ButtonMask = ButtonMask(0);

    pub fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 & 0x0F == 0
    }

    pub fn contains(&self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub fn set(&mut self, button: Button) {
        self.0 |= button.mask();
    }

    pub fn clear(&mut self, button: Button) {
        self.0 &= !button.mask();
    }

    /// Highest-precedence pressed button (lowest-numbered bit wins).
    pub fn resolve(&self) -> Option<Button> {
        Button::ALL.into_iter().find(|b| self.contains(*b))
    }
}

impl From<Button> for ButtonMask {
    fn from(button: Button) -> Self {
        Self(button.mask())
    }
}

/// States of the reflex game state machine
///
/// The machine starts in `Init` and then cycles forever:
/// instructions, arm hold, flashes, stats, score update, instructions again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Power-on state
    #[default]
    Init,
    /// Draw instructions and the high-score table
    ShowInfo,
    /// Wait for the player to touch a button
    WaitInfo,
    /// Player must keep holding for five seconds to arm the round
    WaitFiveSeconds,
    /// Blank the LCD and prepare a new sequence
    BlankScreen,
    /// Light the current LED of the sequence
    BlinkLed,
    /// Wait for the matching button
    WaitForButton,
    /// Player hit the correct button
    ButtonPressed,
    /// Randomized pause before the next flash
    WaitBetweenFlash,
    /// Draw average, fastest and slowest response
    ShowStats,
    /// Keep the stats on screen
    WaitStats,
    /// Rank the round average into the high-score table
    UpdateScores,
}

impl GamePhase {
    pub const ALL: [GamePhase; 12] = [
        GamePhase::Init,
        GamePhase::ShowInfo,
        GamePhase::WaitInfo,
        GamePhase::WaitFiveSeconds,
        GamePhase::BlankScreen,
        GamePhase::BlinkLed,
        GamePhase::WaitForButton,
        GamePhase::ButtonPressed,
        GamePhase::WaitBetweenFlash,
        GamePhase::ShowStats,
        GamePhase::WaitStats,
        GamePhase::UpdateScores,
    ];

    /// Parse a phase from its snake_case name
    pub fn from_str(s: &str) -> Option<Self> {
        GamePhase::ALL.into_iter().find(|p| p.as_str() == s)
    }

    /// snake_case name used in logs and the status line
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Init => "init",
            GamePhase::ShowInfo => "show_info",
            GamePhase::WaitInfo => "wait_info",
            GamePhase::WaitFiveSeconds => "wait_five_seconds",
            GamePhase::BlankScreen => "blank_screen",
            GamePhase::BlinkLed => "blink_led",
            GamePhase::WaitForButton => "wait_for_button",
            GamePhase::ButtonPressed => "button_pressed",
            GamePhase::WaitBetweenFlash => "wait_between_flash",
            GamePhase::ShowStats => "show_stats",
            GamePhase::WaitStats => "wait_stats",
            GamePhase::UpdateScores => "update_scores",
        }
    }

    /// Whether a round is in progress (sequence generated, not yet scored).
    pub fn in_round(&self) -> bool {
        matches!(
            self,
            GamePhase::BlankScreen
                | GamePhase::BlinkLed
                | GamePhase::WaitForButton
                | GamePhase::ButtonPressed
                | GamePhase::WaitBetweenFlash
        )
    }
}
