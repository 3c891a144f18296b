//! Executor: one scheduler tick of the whole game.
//!
//! Order within a tick is fixed: buttons are sampled, timing is updated,
//! LEDs and the LCD are driven from the current phase, and only then does the
//! controller pick and commit the next phase. Rendering therefore never sees a
//! half-applied transition.

use crate::conductor::{ButtonConductor, LcdConductor, LedConductor, TimerConductor};
use crate::core::{GameSnapshot, GameState, ReflexController, RoundStats};
use crate::peripherals::{ButtonReader, IntervalTimer, LcdDriver, LedDriver};
use crate::types::{GamePhase, TICK_MS};

pub struct Executor<B, T, L, D> {
    state: GameState,
    controller: ReflexController,
    button_conductor: ButtonConductor,
    timer_conductor: TimerConductor,
    led_conductor: LedConductor,
    lcd_conductor: LcdConductor,
    buttons: B,
    timer: T,
    leds: L,
    lcd: D,
    ticks: u64,
    rounds_completed: u32,
}

impl<B, T, L, D> Executor<B, T, L, D>
where
    B: ButtonReader,
    T: IntervalTimer,
    L: LedDriver,
    D: LcdDriver,
{
    /// Build an executor over the given peripherals and reset everything.
    pub fn new(buttons: B, timer: T, leds: L, lcd: D) -> Self {
        let mut executor = Self {
            state: GameState::new(),
            controller: ReflexController::new(),
            button_conductor: ButtonConductor,
            timer_conductor: TimerConductor::default(),
            led_conductor: LedConductor::default(),
            lcd_conductor: LcdConductor,
            buttons,
            timer,
            leds,
            lcd,
            ticks: 0,
            rounds_completed: 0,
        };
        executor.init();
        executor
    }

    /// Power-on reset of game data, controller counters and outputs.
    pub fn init(&mut self) {
        self.state.init();
        self.controller = ReflexController::new();
        self.timer_conductor = TimerConductor::default();
        self.led_conductor.reset(&mut self.leds);
        self.lcd.blank_screen();
        self.timer.stop();
        self.timer.reset();
        self.ticks = 0;
        self.rounds_completed = 0;
    }

    /// Run one tick and return the committed next phase.
    pub fn run(&mut self) -> GamePhase {
        self.timer.advance(TICK_MS);

        self.button_conductor.run(&mut self.buttons, &mut self.state);
        self.timer_conductor.run(&mut self.timer, &mut self.state);
        self.led_conductor.run(&mut self.leds, &mut self.state);
        self.lcd_conductor.run(&mut self.lcd, &self.state);

        let current = self.state.current_state();
        let next = self.controller.tick(&mut self.state);
        self.ticks += 1;

        match (current, next) {
            (GamePhase::WaitForButton, GamePhase::ShowInfo) => {
                log::info!(
                    "round abandoned at flash {} (no correct press)",
                    self.state.current_index() + 1
                );
            }
            (GamePhase::WaitBetweenFlash, GamePhase::ShowStats) => {
                self.rounds_completed += 1;
                log::info!(
                    "round {} done: avg {:.3}s min {:.3}s max {:.3}s",
                    self.rounds_completed,
                    self.state.average_response_time(),
                    self.state.min_response_time(),
                    self.state.max_response_time()
                );
            }
            _ => {}
        }

        next
    }

    /// Run `n` ticks, returning the last committed phase.
    pub fn run_for(&mut self, n: u32) -> GamePhase {
        let mut phase = self.state.current_state();
        for _ in 0..n {
            phase = self.run();
        }
        phase
    }

    pub fn phase(&self) -> GamePhase {
        self.state.current_state()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn controller(&self) -> &ReflexController {
        &self.controller
    }

    pub fn round_stats(&self) -> &RoundStats {
        self.timer_conductor.stats()
    }

    pub fn lit_led(&self) -> Option<u8> {
        self.led_conductor.lit()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn buttons(&self) -> &B {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }

    pub fn lcd(&self) -> &D {
        &self.lcd
    }
}
