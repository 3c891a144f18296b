//! Conductors: per-peripheral Moore actions.
//!
//! Each conductor looks only at the *current* phase and moves data between
//! its peripheral and [`GameState`]. None of them decides a transition.

use crate::core::{GameState, RoundStats};
use crate::peripherals::{ButtonReader, IntervalTimer, LcdDriver, LedDriver};
use crate::types::GamePhase;

/// Samples the button port into `GameState::pressed_button`.
#[derive(Debug, Clone, Default)]
pub struct ButtonConductor;

impl ButtonConductor {
    pub fn run(&mut self, reader: &mut impl ButtonReader, state: &mut GameState) {
        let pressed = reader.read_mask().resolve();
        if pressed != state.pressed_button() {
            log::trace!("pressed button {:?}", pressed);
        }
        state.set_pressed_button(pressed);
    }
}

/// Measures response times and keeps the round statistics.
#[derive(Debug, Clone, Default)]
pub struct TimerConductor {
    stats: RoundStats,
}

impl TimerConductor {
    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    pub fn run(&mut self, timer: &mut impl IntervalTimer, state: &mut GameState) {
        match state.current_state() {
            GamePhase::BlankScreen => {
                self.stats = RoundStats::new();
                self.publish(state);
            }
            GamePhase::BlinkLed => {
                timer.reset();
                timer.start();
            }
            GamePhase::ButtonPressed => {
                timer.stop();
                let response = timer.elapsed_seconds();
                state.set_response_time(response);
                self.stats.record(response);
                self.publish(state);
                log::debug!(
                    "flash {} answered in {:.3}s",
                    state.current_index() + 1,
                    response
                );
            }
            _ => {}
        }
    }

    fn publish(&self, state: &mut GameState) {
        state.set_min_response_time(self.stats.min);
        state.set_max_response_time(self.stats.max);
        state.set_average_response_time(self.stats.average);
    }
}

/// Lights the target LED and advances the sequence after a correct press.
#[derive(Debug, Clone, Default)]
pub struct LedConductor {
    lit: Option<u8>,
}

impl LedConductor {
    /// LED currently driven on, if any.
    pub fn lit(&self) -> Option<u8> {
        self.lit
    }

    /// Darken the whole bank and forget what was lit.
    pub fn reset(&mut self, driver: &mut impl LedDriver) {
        driver.all_off();
        self.lit = None;
    }

    pub fn run(&mut self, driver: &mut impl LedDriver, state: &mut GameState) {
        let wanted = match state.current_state() {
            GamePhase::BlinkLed | GamePhase::WaitForButton => state.get_led(),
            GamePhase::ButtonPressed => {
                state.increment_index();
                None
            }
            _ => None,
        };

        if wanted == self.lit {
            return;
        }
        if let Some(led) = self.lit {
            driver.set_led(led, false);
        }
        if let Some(led) = wanted {
            driver.set_led(led, true);
        }
        self.lit = wanted;
    }
}

/// Draws the LCD for phases that have something to show.
#[derive(Debug, Clone, Default)]
pub struct LcdConductor;

impl LcdConductor {
    pub fn run(&mut self, driver: &mut impl LcdDriver, state: &GameState) {
        match state.current_state() {
            GamePhase::ShowInfo => {
                driver.show_instructions(
                    state.high_scores().entries(),
                    state.average_response_time(),
                );
            }
            GamePhase::BlankScreen | GamePhase::UpdateScores => driver.blank_screen(),
            GamePhase::ShowStats => {
                driver.show_stats(
                    state.average_response_time(),
                    state.min_response_time(),
                    state.max_response_time(),
                );
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peripherals::TickTimer;
    use crate::types::{Button, ButtonMask, SLOW_RESPONSE_SECS};

    #[derive(Default)]
    struct Leds {
        on: [bool; 4],
        writes: usize,
    }

    impl LedDriver for Leds {
        fn set_led(&mut self, led: u8, on: bool) {
            self.on[(led - 1) as usize] = on;
            self.writes += 1;
        }
    }

    #[test]
    fn button_conductor_resolves_mask_precedence() {
        let mut state = GameState::new();
        let mut mask = ButtonMask::from_bits(0b1010);

        ButtonConductor.run(&mut mask, &mut state);
        assert_eq!(state.pressed_button(), Some(Button::Btn1));

        let mut none = ButtonMask::NONE;
        ButtonConductor.run(&mut none, &mut state);
        assert_eq!(state.pressed_button(), None);
    }

    #[test]
    fn timer_conductor_measures_and_aggregates() {
        let mut state = GameState::new();
        let mut timer = TickTimer::new();
        let mut tc = TimerConductor::default();

        state.set_current_state(GamePhase::BlankScreen);
        tc.run(&mut timer, &mut state);
        assert_eq!(state.min_response_time(), SLOW_RESPONSE_SECS);

        for ms in [300, 100, 200] {
            state.set_current_state(GamePhase::BlinkLed);
            tc.run(&mut timer, &mut state);
            for _ in 0..ms {
                timer.advance(1);
            }
            state.set_current_state(GamePhase::ButtonPressed);
            tc.run(&mut timer, &mut state);
        }

        assert_eq!(tc.stats().samples, 3);
        assert_eq!(state.response_time(), 0.2);
        assert_eq!(state.min_response_time(), 0.1);
        assert_eq!(state.max_response_time(), 0.3);
        assert!((state.average_response_time() - 0.2).abs() < 1e-9);
    }

    #[test]
    fn led_conductor_lights_only_target_while_waiting() {
        let mut state = GameState::new();
        state.generate_sequence(21);
        let target = state.get_led().unwrap();
        let mut leds = Leds::default();
        let mut lc = LedConductor::default();

        state.set_current_state(GamePhase::WaitBetweenFlash);
        lc.run(&mut leds, &mut state);
        assert_eq!(leds.on, [false; 4]);

        state.set_current_state(GamePhase::BlinkLed);
        lc.run(&mut leds, &mut state);
        state.set_current_state(GamePhase::WaitForButton);
        lc.run(&mut leds, &mut state);
        let lit: Vec<u8> = (1..=4).filter(|l| leds.on[(l - 1) as usize]).collect();
        assert_eq!(lit, vec![target]);
        assert_eq!(leds.writes, 1, "held LED should not be rewritten");

        state.set_current_state(GamePhase::ButtonPressed);
        lc.run(&mut leds, &mut state);
        assert_eq!(leds.on, [false; 4]);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn led_conductor_skips_when_sequence_done() {
        let mut state = GameState::new();
        state.generate_sequence(4);
        for _ in 0..10 {
            state.increment_index();
        }
        let mut leds = Leds::default();
        let mut lc = LedConductor::default();

        state.set_current_state(GamePhase::WaitForButton);
        lc.run(&mut leds, &mut state);
        assert_eq!(lc.lit(), None);
        assert_eq!(leds.writes, 0);
    }
}
