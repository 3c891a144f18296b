//! BoardView: draws the reflex board (lamps, LCD, status line) into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::panel::{LcdPanel, LedPanel, LCD_COLS, LCD_ROWS};
use crate::types::{Button, SEQUENCE_LENGTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const LAMP_COLORS: [Rgb; 4] = [
    Rgb::new(220, 60, 60),
    Rgb::new(240, 210, 70),
    Rgb::new(80, 200, 100),
    Rgb::new(70, 130, 230),
];

const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const LCD_BG: Rgb = Rgb::new(20, 40, 30);
const LCD_FG: Rgb = Rgb::new(150, 230, 170);

pub struct BoardView {
    lamp_w: u16,
    lamp_h: u16,
    anchor_y: AnchorY,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            lamp_w: 6,
            lamp_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl BoardView {
    pub fn new(lamp_w: u16, lamp_h: u16) -> Self {
        Self {
            lamp_w: lamp_w.max(1),
            lamp_h: lamp_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Columns and rows the board occupies.
    pub fn size(&self) -> (u16, u16) {
        let lamps_w = 4 * self.lamp_w + 3 * self.lamp_gap();
        let lcd_w = LCD_COLS as u16 + 2;
        // Title, gap, lamps, labels, gap, LCD box, status.
        let h = 1 + 1 + self.lamp_h + 1 + 1 + (LCD_ROWS as u16 + 2) + 1;
        (lamps_w.max(lcd_w), h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        leds: &LedPanel,
        lcd: &LcdPanel,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (board_w, board_h) = self.size();
        let x0 = viewport.width.saturating_sub(board_w) / 2;
        let mut y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(board_h) / 2,
            AnchorY::Top => 0,
        };

        let title = CellStyle::fg(Rgb::new(240, 240, 240)).bold();
        let title_text = "REFLEX TEST";
        let title_x = x0 + board_w.saturating_sub(title_text.len() as u16) / 2;
        fb.put_str(title_x, y, title_text, title);
        y = y.saturating_add(2);

        self.draw_lamps(fb, leds, x0, y, board_w);
        y = y.saturating_add(self.lamp_h + 2);

        self.draw_lcd(fb, lcd, x0, y, board_w);
        y = y.saturating_add(LCD_ROWS as u16 + 2);

        self.draw_status(fb, snap, x0, y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        leds: &LedPanel,
        lcd: &LcdPanel,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, leds, lcd, viewport, &mut fb);
        fb
    }

    fn lamp_gap(&self) -> u16 {
        self.lamp_w / 2 + 1
    }

    fn draw_lamps(&self, fb: &mut FrameBuffer, leds: &LedPanel, x0: u16, y: u16, board_w: u16) {
        let gap = self.lamp_gap();
        let row_w = 4 * self.lamp_w + 3 * gap;
        let mut x = x0 + board_w.saturating_sub(row_w) / 2;
        let label = CellStyle::fg(Rgb::new(200, 200, 200));

        for (button, color) in Button::ALL.into_iter().zip(LAMP_COLORS) {
            let led = button.id();
            let style = if leds.is_lit(led) {
                CellStyle::fg(color).on(PANEL_BG).bold()
            } else {
                CellStyle::fg(color.dimmed()).on(PANEL_BG)
            };
            fb.fill_rect(x, y, self.lamp_w, self.lamp_h, '█', style);

            let label_x = x + self.lamp_w.saturating_sub(1) / 2;
            fb.put_u32(label_x, y + self.lamp_h, led as u32, label);
            x = x.saturating_add(self.lamp_w + gap);
        }
    }

    fn draw_lcd(&self, fb: &mut FrameBuffer, lcd: &LcdPanel, x0: u16, y: u16, board_w: u16) {
        let box_w = LCD_COLS as u16 + 2;
        let box_h = LCD_ROWS as u16 + 2;
        let x = x0 + board_w.saturating_sub(box_w) / 2;
        let frame = CellStyle::fg(Rgb::new(120, 120, 130));
        let text = CellStyle::fg(LCD_FG).on(LCD_BG);

        fb.draw_box(x, y, box_w, box_h, frame);
        fb.fill_rect(x + 1, y + 1, LCD_COLS as u16, LCD_ROWS as u16, ' ', text);
        for (row, line) in lcd.lines().iter().enumerate() {
            fb.put_str(x + 1, y + 1 + row as u16, line, text);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y: u16) {
        let label = CellStyle::fg(Rgb::new(150, 150, 160));
        let value = CellStyle::fg(Rgb::new(230, 230, 230)).bold();

        let mut x = fb.put_str(x0, y, "state ", label);
        x = fb.put_str(x, y, snap.phase.as_str(), value);

        if snap.phase.in_round() {
            x = fb.put_str(x, y, "  flash ", label);
            x = fb.put_u32(x, y, snap.flashes_done() as u32, value);
            x = fb.put_str(x, y, "/", value);
            x = fb.put_u32(x, y, SEQUENCE_LENGTH as u32, value);
        }

        x = fb.put_str(x, y, "  btn ", label);
        let pressed = snap.pressed_button.as_ref().map_or("-", Button::as_str);
        x = fb.put_str(x, y, pressed, value);
        fb.put_str(x, y, "  [q] quit", label);
    }
}
