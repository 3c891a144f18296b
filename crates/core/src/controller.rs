//! Reflex game state machine
//!
//! A Moore machine over [`GamePhase`]. Each tick runs in two steps:
//!
//! 1. [`ReflexController::run_actions`] performs the action of the *current*
//!    phase (counter bookkeeping, round setup, score ranking).
//! 2. [`ReflexController::next_phase`] is a pure function of the phase, the
//!    controller counters and the game state that picks the next phase.
//!
//! [`ReflexController::tick`] does both and commits the result into
//! [`GameState`].
//!
//! All waits are tick counts (see the constants in [`crate::types`]); there is
//! no wall clock in here.

use crate::rng::SimpleRng;
use crate::types::{GamePhase, FIVE_SECOND_WAIT, ONE_SECOND_WAIT, TWO_SECOND_WAIT};
use crate::GameState;

/// Counter values held by the controller, exposed for status displays and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerTimers {
    pub five_second: u32,
    pub flash: u32,
    pub flash_wait: u32,
    pub button_timeout: u32,
    pub wait_stats: u32,
}

/// Drives the game through its phases, one tick at a time.
#[derive(Debug, Clone)]
pub struct ReflexController {
    five_second_timer: u32,
    flash_timer: u32,
    /// Randomized pause before the next flash, in ticks.
    flash_wait: u32,
    button_timeout_timer: u32,
    wait_stats_timer: u32,
    rng: SimpleRng,
}

impl ReflexController {
    pub fn new() -> Self {
        Self {
            five_second_timer: 0,
            flash_timer: 0,
            flash_wait: 0,
            button_timeout_timer: 0,
            wait_stats_timer: 0,
            rng: SimpleRng::default(),
        }
    }

    pub fn timers(&self) -> ControllerTimers {
        ControllerTimers {
            five_second: self.five_second_timer,
            flash: self.flash_timer,
            flash_wait: self.flash_wait,
            button_timeout: self.button_timeout_timer,
            wait_stats: self.wait_stats_timer,
        }
    }

    pub fn flash_wait(&self) -> u32 {
        self.flash_wait
    }

    /// Run one tick: actions of the current phase, then the transition.
    ///
    /// The next phase is written back into `state` and returned.
    pub fn tick(&mut self, state: &mut GameState) -> GamePhase {
        let current = state.current_state();
        self.run_actions(current, state);
        let next = self.next_phase(current, state);

        if next != current {
            log::debug!("{} -> {}", current.as_str(), next.as_str());
        }

        state.set_current_state(next);
        next
    }

    /// Moore actions for `phase`.
    pub fn run_actions(&mut self, phase: GamePhase, state: &mut GameState) {
        match phase {
            GamePhase::Init | GamePhase::ShowInfo => {}
            GamePhase::WaitInfo => {
                self.five_second_timer = 0;
            }
            GamePhase::WaitFiveSeconds => {
                self.five_second_timer += 1;
            }
            GamePhase::BlankScreen => {
                self.flash_timer = 0;
                self.start_round(state);
            }
            GamePhase::WaitBetweenFlash => {
                self.flash_timer += 1;
            }
            GamePhase::BlinkLed => {
                self.button_timeout_timer = 0;
            }
            GamePhase::WaitForButton => {
                self.button_timeout_timer += 1;
            }
            GamePhase::ButtonPressed => {
                self.flash_timer = 0;
                self.flash_wait = self.random_wait(TWO_SECOND_WAIT, ONE_SECOND_WAIT);
            }
            GamePhase::ShowStats => {
                self.wait_stats_timer = 0;
            }
            GamePhase::WaitStats => {
                self.wait_stats_timer += 1;
            }
            GamePhase::UpdateScores => {
                state.update_scores();
            }
        }
    }

    /// Transition function.
    pub fn next_phase(&self, phase: GamePhase, state: &GameState) -> GamePhase {
        let button_held = state.pressed_button().is_some();

        match phase {
            GamePhase::Init => GamePhase::ShowInfo,
            GamePhase::ShowInfo => GamePhase::WaitInfo,
            GamePhase::WaitInfo => {
                if button_held {
                    GamePhase::WaitFiveSeconds
                } else {
                    GamePhase::WaitInfo
                }
            }
            GamePhase::WaitFiveSeconds => {
                if self.five_second_timer >= FIVE_SECOND_WAIT && button_held {
                    GamePhase::BlankScreen
                } else if !button_held {
                    // Let go before the hold completed.
                    GamePhase::WaitInfo
                } else {
                    GamePhase::WaitFiveSeconds
                }
            }
            GamePhase::BlankScreen => GamePhase::WaitBetweenFlash,
            GamePhase::WaitBetweenFlash => {
                if state.is_sequence_done() {
                    GamePhase::ShowStats
                } else if self.flash_timer >= self.flash_wait {
                    GamePhase::BlinkLed
                } else {
                    GamePhase::WaitBetweenFlash
                }
            }
            GamePhase::BlinkLed => GamePhase::WaitForButton,
            GamePhase::WaitForButton => {
                if state.is_correct_button_pressed() {
                    GamePhase::ButtonPressed
                } else if self.button_timeout_timer >= FIVE_SECOND_WAIT {
                    // Too slow: abort the round.
                    GamePhase::ShowInfo
                } else {
                    GamePhase::WaitForButton
                }
            }
            GamePhase::ButtonPressed => GamePhase::WaitBetweenFlash,
            GamePhase::ShowStats => GamePhase::WaitStats,
            GamePhase::WaitStats => {
                if self.wait_stats_timer >= FIVE_SECOND_WAIT {
                    GamePhase::UpdateScores
                } else {
                    GamePhase::WaitStats
                }
            }
            GamePhase::UpdateScores => GamePhase::ShowInfo,
        }
    }

    /// Reseed from the previous response time, regenerate the sequence and
    /// pick the first flash wait.
    fn start_round(&mut self, state: &mut GameState) {
        // Whole seconds of the last response, so usually 0. Kept as-is: rounds
        // are replayable from the previous response time.
        let reseed = state.response_time() as u32;
        self.rng = SimpleRng::new(reseed);

        let seed = self.rng.next_u32();
        state.generate_sequence(seed);
        self.flash_wait = self.random_wait(TWO_SECOND_WAIT, TWO_SECOND_WAIT);

        log::info!(
            "round start: seed {} sequence {:?} first wait {}ms",
            seed,
            state.sequence(),
            self.flash_wait
        );
    }

    /// `base + rand(width)` ticks.
    fn random_wait(&mut self, width: u32, base: u32) -> u32 {
        self.rng.next_range(width) + base
    }
}

impl Default for ReflexController {
    fn default() -> Self {
        Self::new()
    }
}
