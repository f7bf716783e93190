//! Keypad widget
//!
//! Buttons are laid out on a grid sized by the widest row; the last button
//! of a shorter row stretches to the right edge.

use glasscalc_app::{keypad_rows, Button};
use glasscalc_core::Mode;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Keypad {
    mode: Mode,
    enabled: bool,
}

impl Keypad {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            enabled: true,
        }
    }

    /// Dim the keypad while input is ignored
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Screen rectangle of every button for `mode` inside `area`
pub fn keypad_layout(area: Rect, mode: Mode) -> Vec<(Rect, Button)> {
    let rows = keypad_rows(mode);
    let cols = rows.iter().map(|row| row.len()).max().unwrap_or(0) as u16;
    if rows.is_empty() || cols == 0 {
        return Vec::new();
    }

    let row_height = area.height / rows.len() as u16;
    let col_width = area.width / cols;
    if row_height == 0 || col_width == 0 {
        return Vec::new();
    }

    let mut cells = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        let y = area.y + r as u16 * row_height;
        for (c, button) in row.iter().enumerate() {
            let x = area.x + c as u16 * col_width;
            let width = if c + 1 == row.len() {
                area.right() - x
            } else {
                col_width
            };
            cells.push((Rect::new(x, y, width, row_height), *button));
        }
    }
    cells
}

impl Widget for Keypad {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (cell, button) in keypad_layout(area, self.mode) {
            let mut label_style = styles::key_label(button);
            if !self.enabled {
                label_style = label_style.patch(styles::text_muted());
            }

            // Bordered keys need three rows; otherwise draw a bare label
            let label_area = if cell.height >= 3 {
                let block = styles::glass_block(false).style(label_style);
                let inner = block.inner(cell);
                block.render(cell, buf);
                Rect {
                    y: inner.y + inner.height / 2,
                    height: 1,
                    ..inner
                }
            } else {
                buf.set_style(cell, label_style);
                Rect { height: 1, ..cell }
            };

            Paragraph::new(button.label())
                .style(label_style)
                .alignment(Alignment::Center)
                .render(label_area, buf);
        }
    }
}
