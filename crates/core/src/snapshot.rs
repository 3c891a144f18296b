//! Plain copy of the observable game state, handed to renderers.

use crate::types::{Button, GamePhase, NUMBER_OF_HIGH_SCORES, SEQUENCE_LENGTH, SLOW_RESPONSE_SECS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub sequence: [u8; SEQUENCE_LENGTH],
    pub index: usize,
    pub pressed_button: Option<Button>,
    pub response_time: f64,
    pub min_response_time: f64,
    pub max_response_time: f64,
    pub average_response_time: f64,
    pub high_scores: [f64; NUMBER_OF_HIGH_SCORES],
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn current_led(&self) -> Option<u8> {
        self.sequence.get(self.index).copied()
    }

    /// Flashes completed this round, for progress displays.
    pub fn flashes_done(&self) -> usize {
        self.index.min(SEQUENCE_LENGTH)
    }

    /// Cheap change detector for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |v: u64| {
            h ^= v;
            h = h.wrapping_mul(0x0100_0000_01b3);
        };
        mix(self.phase as u64);
        mix(self.index as u64);
        mix(self.pressed_button.map_or(0, |b| b.id()) as u64);
        mix(self.average_response_time.to_bits());
        for led in self.sequence {
            mix(led as u64);
        }
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: GamePhase::Init,
            sequence: [0; SEQUENCE_LENGTH],
            index: 0,
            pressed_button: None,
            response_time: 0.0,
            min_response_time: SLOW_RESPONSE_SECS,
            max_response_time: 0.0,
            average_response_time: 0.0,
            high_scores: [SLOW_RESPONSE_SECS; NUMBER_OF_HIGH_SCORES],
        }
    }
}
