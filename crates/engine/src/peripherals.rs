//! Peripheral seams between the game and the board.
//!
//! Each trait is the narrow contract one conductor needs from its hardware.
//! The terminal front-end implements them over a keyboard and a framebuffer;
//! tests implement them with plain structs.

use std::time::{Duration, Instant};

use crate::types::{ButtonMask, NUMBER_OF_HIGH_SCORES, NUMBER_OF_LEDS};

/// Raw button port.
pub trait ButtonReader {
    /// Currently held buttons, possibly several bits at once.
    fn read_mask(&mut self) -> ButtonMask;
}

/// A fixed mask reads as itself. Handy for scripted input.
impl ButtonReader for ButtonMask {
    fn read_mask(&mut self) -> ButtonMask {
        *self
    }
}

/// Interval timer measuring response times.
pub trait IntervalTimer {
    fn start(&mut self);
    fn stop(&mut self);
    /// Clear the accumulated duration.
    fn reset(&mut self);
    /// Accumulated running time in seconds.
    fn elapsed_seconds(&self) -> f64;

    /// Called once per scheduler tick before any conductor runs.
    ///
    /// Timers backed by a real clock ignore it.
    fn advance(&mut self, _elapsed_ms: u32) {}
}

/// Four-LED bank, addressed by 1-based LED id.
pub trait LedDriver {
    fn set_led(&mut self, led: u8, on: bool);

    fn all_off(&mut self) {
        for led in 1..=NUMBER_OF_LEDS {
            self.set_led(led, false);
        }
    }
}

/// Text display.
pub trait LcdDriver {
    fn show_instructions(&mut self, high_scores: &[f64; NUMBER_OF_HIGH_SCORES], average: f64);
    fn show_stats(&mut self, average: f64, min: f64, max: f64);
    fn blank_screen(&mut self);
}

/// Timer that counts scheduler ticks instead of reading a clock.
///
/// Deterministic: with a 1 ms tick, `elapsed_seconds` is exactly the number of
/// ticks spent running divided by 1000.
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    running: bool,
    elapsed_ms: u64,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl IntervalTimer for TickTimer {
    fn start(&mut self) {
        self.running = true;
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    fn elapsed_seconds(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }

    fn advance(&mut self, elapsed_ms: u32) {
        if self.running {
            self.elapsed_ms += elapsed_ms as u64;
        }
    }
}

/// Wall-clock timer over [`Instant`].
#[derive(Debug, Clone, Default)]
pub struct InstantTimer {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl InstantTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

impl IntervalTimer for InstantTimer {
    fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    fn stop(&mut self) {
        if let Some(t) = self.started_at.take() {
            self.accumulated += t.elapsed();
        }
    }

    fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        if self.started_at.is_some() {
            self.started_at = Some(Instant::now());
        }
    }

    fn elapsed_seconds(&self) -> f64 {
        let running = self.started_at.map_or(Duration::ZERO, |t| t.elapsed());
        (self.accumulated + running).as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Button;

    #[test]
    fn tick_timer_counts_only_while_running() {
        let mut t = TickTimer::new();
        t.advance(10);
        assert_eq!(t.elapsed_seconds(), 0.0);

        t.start();
        for _ in 0..250 {
            t.advance(1);
        }
        t.stop();
        t.advance(100);
        assert_eq!(t.elapsed_seconds(), 0.25);

        t.reset();
        assert_eq!(t.elapsed_seconds(), 0.0);
        assert!(!t.is_running());
    }

    #[test]
    fn instant_timer_freezes_when_stopped() {
        let mut t = InstantTimer::new();
        assert_eq!(t.elapsed_seconds(), 0.0);

        t.start();
        assert!(t.is_running());
        t.stop();
        let frozen = t.elapsed_seconds();
        assert_eq!(t.elapsed_seconds(), frozen);

        t.reset();
        assert_eq!(t.elapsed_seconds(), 0.0);
    }

    #[test]
    fn fixed_mask_reads_back() {
        let mut mask = ButtonMask::from(Button::Btn2);
        assert_eq!(mask.read_mask().resolve(), Some(Button::Btn2));
    }
}
