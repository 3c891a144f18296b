//! Key mapping from terminal events to board buttons.

use crate::types::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the board button it stands in for.
///
/// Number keys follow the LED labels; `a s d f` give a home-row alternative.
pub fn key_to_button(code: KeyCode) -> Option<Button> {
    match code {
        KeyCode::Char('1') | KeyCode::Char('a') | KeyCode::Char('A') => Some(Button::Btn0),
        KeyCode::Char('2') | KeyCode::Char('s') | KeyCode::Char('S') => Some(Button::Btn1),
        KeyCode::Char('3') | KeyCode::Char('d') | KeyCode::Char('D') => Some(Button::Btn2),
        KeyCode::Char('4') | KeyCode::Char('f') | KeyCode::Char('F') => Some(Button::Btn3),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
