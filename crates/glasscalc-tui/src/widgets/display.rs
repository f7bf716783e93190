//! Display panel widget
//!
//! Right-aligned value on the middle row. The error flag turns the text and
//! border red; the loading flag dims the value and shows a marker.

use glasscalc_app::DisplayView;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Marker shown while an evaluation is in flight
pub const LOADING_MARKER: &str = "…";

pub struct CalcDisplay<'a> {
    view: &'a DisplayView,
}

impl<'a> CalcDisplay<'a> {
    pub fn new(view: &'a DisplayView) -> Self {
        Self { view }
    }
}

impl Widget for CalcDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = if self.view.error {
            styles::glass_block(false).border_style(styles::display_error())
        } else {
            styles::glass_block(self.view.loading)
        };
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let value_style = if self.view.error {
            styles::display_error()
        } else if self.view.loading {
            styles::display_loading()
        } else {
            styles::display_value()
        };

        let mut spans = Vec::with_capacity(3);
        if self.view.loading {
            spans.push(Span::styled(LOADING_MARKER, styles::display_loading()));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(self.view.text.clone(), value_style));

        let row = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
        };
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Right)
            .render(row, buf);
    }
}
