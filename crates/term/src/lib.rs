//! Terminal front-end for the reflex board.
//!
//! The LED bank and LCD are emulated by `LedPanel` and `LcdPanel`, which the
//! engine drives through its peripheral traits. `BoardView` draws them into a
//! framebuffer and `TerminalRenderer` flushes only what changed.

pub mod board_view;
pub mod fb;
pub mod panel;
pub mod render_throttle;
pub mod renderer;

pub use reflex_test_core as core;
pub use reflex_test_engine as engine;
pub use reflex_test_types as types;

pub use board_view::{AnchorY, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use panel::{LcdPanel, LedPanel, LCD_COLS, LCD_ROWS};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
