//! Main render/view function (View in TEA pattern)


use glasscalc_app::{AppState, Button};
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Clickable regions from the last rendered frame
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Button)>,
}

impl HitMap {
    /// Button under the given cell, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<Button> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, button)| *button)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; returns where each clickable element ended
/// up so pointer events can be resolved against this frame.
pub fn view(frame: &mut Frame, state: &AppState) -> HitMap {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let mut regions = Vec::new();

    frame.render_widget(widgets::ModeTabs::new(state.mode), areas.header);
    regions.extend(
        widgets::tab_layout(areas.header)
            .into_iter()
            .map(|(rect, mode)| (rect, Button::Mode(mode))),
    );

    let display = state.display_view();
    frame.render_widget(widgets::CalcDisplay::new(&display), areas.display);

    frame.render_widget(
        widgets::Keypad::new(state.mode).enabled(!state.is_evaluating()),
        areas.keypad,
    );
    regions.extend(widgets::keypad_layout(areas.keypad, state.mode));

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    HitMap { regions }
}
