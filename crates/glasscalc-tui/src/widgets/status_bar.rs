//! Status bar widget
//!
//! Service reachability and address on the left, key hints on the right.

use glasscalc_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const HINTS: &str = "Enter = · Esc C · Bksp CE · ^ x² · Tab mode · Ctrl+C quit ";

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn server_info(&self) -> Line<'static> {
        let (icon, label, style) = styles::server_indicator(self.state.server);
        Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{} {}", icon, label), style),
            Span::styled(
                format!("  {}", self.state.settings.server.url),
                styles::text_muted(),
            ),
        ])
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.server_info()).render(area, buf);

        let hints_width = HINTS.chars().count() as u16;
        let left_width = self.server_info().width() as u16;
        // Hints only when both fit on the line
        if left_width + hints_width < area.width {
            Paragraph::new(Span::styled(HINTS, styles::text_muted()))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }
}
