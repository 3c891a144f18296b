//! Game state module - the single source of truth for all mutable game data
//!
//! `GameState` is pure bookkeeping: the current phase, the round's LED
//! sequence and replay index, the last resolved button, response-time
//! statistics and the high-score table. It contains no timing or transition
//! logic; the controller and the peripheral conductors drive it through the
//! accessors below.

use crate::rng::SimpleRng;
use crate::scoring::HighScores;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    current_state: GamePhase,
    sequence: [u8; SEQUENCE_LENGTH],
    index: usize,
    pressed_button: Option<Button>,
    response_time: f64,
    min_response_time: f64,
    max_response_time: f64,
    average_response_time: f64,
    high_scores: HighScores,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            current_state: GamePhase::Init,
            sequence: [0; SEQUENCE_LENGTH],
            index: 0,
            pressed_button: None,
            response_time: 0.0,
            min_response_time: SLOW_RESPONSE_SECS,
            max_response_time: 0.0,
            average_response_time: 0.0,
            high_scores: HighScores::new(),
        }
    }

    /// Reset every field to its power-on value, high scores included.
    pub fn init(&mut self) {
        *self = Self::new();
    }

    /// Fill the sequence with fresh LED ids drawn from `seed` and rewind the index.
    pub fn generate_sequence(&mut self, seed: u32) -> &[u8; SEQUENCE_LENGTH] {
        self.index = 0;

        let mut rng = SimpleRng::new(seed);
        for slot in self.sequence.iter_mut() {
            *slot = rng.next_led();
        }

        log::trace!("sequence {:?} (seed {})", self.sequence, seed);
        &self.sequence
    }

    pub fn sequence(&self) -> &[u8; SEQUENCE_LENGTH] {
        &self.sequence
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn is_sequence_done(&self) -> bool {
        self.index == SEQUENCE_LENGTH
    }

    /// LED to flash at the current index, or `None` once the sequence is done.
    pub fn get_led(&self) -> Option<u8> {
        self.sequence.get(self.index).copied()
    }

    /// Advance the replay index, saturating at the sequence length.
    pub fn increment_index(&mut self) {
        if self.index < SEQUENCE_LENGTH {
            self.index += 1;
        }
    }

    /// Whether the pressed button matches the LED at the current index.
    ///
    /// Always false when nothing is pressed or the sequence is already done.
    pub fn is_correct_button_pressed(&self) -> bool {
        match (self.pressed_button, self.get_led()) {
            (Some(button), Some(led)) => button.id() == led,
            _ => false,
        }
    }

    pub fn pressed_button(&self) -> Option<Button> {
        self.pressed_button
    }

    pub fn set_pressed_button(&mut self, button: Option<Button>) {
        self.pressed_button = button;
    }

    pub fn current_state(&self) -> GamePhase {
        self.current_state
    }

    pub fn set_current_state(&mut self, state: GamePhase) {
        self.current_state = state;
    }

    pub fn response_time(&self) -> f64 {
        self.response_time
    }

    pub fn set_response_time(&mut self, secs: f64) {
        self.response_time = secs;
    }

    pub fn min_response_time(&self) -> f64 {
        self.min_response_time
    }

    pub fn set_min_response_time(&mut self, secs: f64) {
        self.min_response_time = secs;
    }

    pub fn max_response_time(&self) -> f64 {
        self.max_response_time
    }

    pub fn set_max_response_time(&mut self, secs: f64) {
        self.max_response_time = secs;
    }

    pub fn average_response_time(&self) -> f64 {
        self.average_response_time
    }

    pub fn set_average_response_time(&mut self, secs: f64) {
        self.average_response_time = secs;
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Replace the whole table (entries are re-sorted).
    pub fn set_high_scores(&mut self, entries: [f64; NUMBER_OF_HIGH_SCORES]) {
        self.high_scores = HighScores::from_entries(entries);
    }

    /// Rank the current round average into the high-score table.
    ///
    /// Returns whether the table changed.
    pub fn update_scores(&mut self) -> bool {
        let average = self.average_response_time;
        let changed = self.high_scores.submit(average);
        if changed {
            log::info!(
                "new high score {:.3}s (rank {})",
                average,
                self.high_scores.rank_of(average).map_or(0, |r| r + 1)
            );
        }
        changed
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.current_state;
        out.sequence = self.sequence;
        out.index = self.index;
        out.pressed_button = self.pressed_button;
        out.response_time = self.response_time;
        out.min_response_time = self.min_response_time;
        out.max_response_time = self.max_response_time;
        out.average_response_time = self.average_response_time;
        out.high_scores = *self.high_scores.entries();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
