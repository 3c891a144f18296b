//! Terminal input module (board-facing).
//!
//! Maps `crossterm` key events onto the four board buttons and tracks which
//! of them are held, including on terminals without key-release events.
//! [`ButtonHandler`] implements the engine's button port directly.

pub mod handler;
pub mod map;

pub use reflex_test_engine as engine;
pub use reflex_test_types as types;

pub use handler::{ButtonHandler, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{key_to_button, should_quit};
