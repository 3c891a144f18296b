//! Scoring module - round statistics and the session high-score table
//!
//! A "score" is a round's average response time in seconds, so lower is
//! better and the table is kept in ascending order.

use crate::types::{NUMBER_OF_HIGH_SCORES, SLOW_RESPONSE_SECS};

/// Fixed-size high-score table, fastest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighScores {
    entries: [f64; NUMBER_OF_HIGH_SCORES],
}

impl HighScores {
    /// A table filled with the slow ceiling value.
    pub fn new() -> Self {
        Self {
            entries: [SLOW_RESPONSE_SECS; NUMBER_OF_HIGH_SCORES],
        }
    }

    /// Build a table from arbitrary entries, sorting them into rank order.
    pub fn from_entries(mut entries: [f64; NUMBER_OF_HIGH_SCORES]) -> Self {
        entries.sort_by(f64::total_cmp);
        Self { entries }
    }

    pub fn entries(&self) -> &[f64; NUMBER_OF_HIGH_SCORES] {
        &self.entries
    }

    pub fn best(&self) -> f64 {
        self.entries[0]
    }

    pub fn worst(&self) -> f64 {
        self.entries[NUMBER_OF_HIGH_SCORES - 1]
    }

    /// Whether `average` would make it into the table.
    pub fn qualifies(&self, average: f64) -> bool {
        average < self.worst()
    }

    /// Rank `average` into the table.
    ///
    /// Replaces the worst entry and re-sorts when `average` is strictly faster,
    /// otherwise leaves the table untouched. Returns whether the table changed.
    pub fn submit(&mut self, average: f64) -> bool {
        if !self.qualifies(average) {
            return false;
        }
        self.entries[NUMBER_OF_HIGH_SCORES - 1] = average;
        self.entries.sort_by(f64::total_cmp);
        true
    }

    /// Zero-based rank of `average` if it is in the table.
    pub fn rank_of(&self, average: f64) -> Option<usize> {
        self.entries.iter().position(|&s| s == average)
    }
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

/// Running min / max / mean over the response times of one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundStats {
    pub samples: u32,
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

impl RoundStats {
    pub fn new() -> Self {
        Self {
            samples: 0,
            min: SLOW_RESPONSE_SECS,
            max: 0.0,
            average: 0.0,
        }
    }

    /// Fold one response time into the aggregate.
    pub fn record(&mut self, response_secs: f64) {
        self.samples += 1;
        self.min = self.min.min(response_secs);
        self.max = self.max.max(response_secs);
        self.average += (response_secs - self.average) / self.samples as f64;
    }
}

impl Default for RoundStats {
    fn default() -> Self {
        Self::new()
    }
}
