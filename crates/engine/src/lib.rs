//! Game engine: peripherals, conductors and the tick executor.
//!
//! The core crate knows nothing about buttons, LEDs or clocks. This crate wires
//! it to the board through four small traits in [`peripherals`] and runs one
//! scheduler tick at a time with [`Executor::run`].

pub mod conductor;
pub mod executor;
pub mod peripherals;

pub use reflex_test_core as core;
pub use reflex_test_types as types;

pub use conductor::{ButtonConductor, LcdConductor, LedConductor, TimerConductor};
pub use executor::Executor;
pub use peripherals::{ButtonReader, InstantTimer, IntervalTimer, LcdDriver, LedDriver, TickTimer};
