//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the reflex game's state machine and its data model.
//! It has **no dependencies** on peripherals, terminals, or clocks, making it:
//!
//! - **Deterministic**: The same previous response time replays the same round
//! - **Testable**: Every transition is reachable by writing inputs into [`GameState`]
//! - **Portable**: Runs behind a terminal, a fake board in tests, or real GPIO
//!
//! # Module Structure
//!
//! - [`game_state`]: sequence, replay index, pressed button, timing statistics
//! - [`controller`]: the 12-state Moore machine ticked once per scheduler period
//! - [`rng`]: LCG used for sequences and randomized flash waits
//! - [`scoring`]: high-score table and running round statistics
//! - [`snapshot`]: plain copy of the game state for renderers
//!
//! # Game Rules
//!
//! - The player holds any button for five seconds to arm a round
//! - Ten LEDs flash one at a time, 2-4s before the first and 1-3s between the rest
//! - Each flash must be answered with the matching button within five seconds,
//!   otherwise the round is abandoned
//! - The round's average response time is ranked into a ten-entry table
//!
//! # Example
//!
//! ```
//! use reflex_test_core::{GameState, ReflexController};
//! use reflex_test_types::GamePhase;
//!
//! let mut state = GameState::new();
//! let mut controller = ReflexController::new();
//!
//! controller.tick(&mut state);
//! controller.tick(&mut state);
//! assert_eq!(state.current_state(), GamePhase::WaitInfo);
//! ```

pub mod controller;
pub mod game_state;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use reflex_test_types as types;

// Re-export commonly used types for convenience
pub use controller::{ControllerTimers, ReflexController};
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use scoring::{HighScores, RoundStats};
pub use snapshot::GameSnapshot;
