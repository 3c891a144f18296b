//! On-screen stand-ins for the board's LED bank and LCD.
//!
//! Both implement the engine's driver traits and only record what was last
//! written; `BoardView` turns them into cells. Each carries a revision counter
//! that bumps on every visible change so the render loop can skip idle frames.

use arrayvec::ArrayVec;

use crate::engine::{LcdDriver, LedDriver};
use crate::types::{NUMBER_OF_HIGH_SCORES, NUMBER_OF_LEDS};

/// Text rows on the LCD.
pub const LCD_ROWS: usize = 16;

/// Text columns on the LCD.
pub const LCD_COLS: usize = 40;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedPanel {
    lit: [bool; NUMBER_OF_LEDS as usize],
    revision: u64,
}

impl LedPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_lit(&self, led: u8) -> bool {
        led >= 1 && self.lit.get((led - 1) as usize).copied().unwrap_or(false)
    }

    pub fn lit(&self) -> &[bool; NUMBER_OF_LEDS as usize] {
        &self.lit
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl LedDriver for LedPanel {
    fn set_led(&mut self, led: u8, on: bool) {
        let Some(slot) = led.checked_sub(1).and_then(|i| self.lit.get_mut(i as usize)) else {
            log::warn!("ignoring write to LED {}", led);
            return;
        };
        if *slot != on {
            *slot = on;
            self.revision += 1;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LcdPanel {
    lines: ArrayVec<String, LCD_ROWS>,
    revision: u64,
}

impl LcdPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_blank(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// All text on the panel, one line per row.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    fn write_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut next = ArrayVec::<String, LCD_ROWS>::new();
        for mut line in lines.into_iter().take(LCD_ROWS) {
            if let Some((cut, _)) = line.char_indices().nth(LCD_COLS) {
                line.truncate(cut);
            }
            next.push(line);
        }
        // The LCD conductor rewrites the same screen every tick.
        if next != self.lines {
            self.lines = next;
            self.revision += 1;
        }
    }
}

impl LcdDriver for LcdPanel {
    fn show_instructions(&mut self, high_scores: &[f64; NUMBER_OF_HIGH_SCORES], average: f64) {
        let half = NUMBER_OF_HIGH_SCORES / 2;
        let mut lines = vec![
            "REFLEX TEST".to_string(),
            String::new(),
            "Hold any button for 5 seconds to start.".to_string(),
            "When an LED lights, press the button".to_string(),
            "under it as fast as you can.".to_string(),
            String::new(),
            "HIGH SCORES (average seconds)".to_string(),
        ];
        for row in 0..half {
            lines.push(format!(
                "{:>2}. {:.3}      {:>2}. {:.3}",
                row + 1,
                high_scores[row],
                row + half + 1,
                high_scores[row + half]
            ));
        }
        lines.push(String::new());
        lines.push(format!("Last average: {:.3} s", average));
        self.write_lines(lines);
    }

    fn show_stats(&mut self, average: f64, min: f64, max: f64) {
        self.write_lines([
            "ROUND COMPLETE".to_string(),
            String::new(),
            format!("Average: {:.3} s", average),
            format!("Fastest: {:.3} s", min),
            format!("Slowest: {:.3} s", max),
        ]);
    }

    fn blank_screen(&mut self) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.clear();
        self.revision += 1;
    }
}
