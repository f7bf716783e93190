//! Mode tabs in the header

use glasscalc_core::Mode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

const TITLE: &str = " glasscalc ";

pub struct ModeTabs {
    active: Mode,
}

impl ModeTabs {
    pub fn new(active: Mode) -> Self {
        Self { active }
    }
}

fn tab_label(mode: Mode) -> String {
    format!(" F{} {} ", mode.ordinal(), mode.label())
}

/// Screen rectangle of each tab inside a header occupying `area`
pub fn tab_layout(area: Rect) -> Vec<(Rect, Mode)> {
    let inner = styles::glass_block(false).inner(area);
    if inner.height == 0 {
        return Vec::new();
    }

    let mut x = inner.x + 1;
    let mut tabs = Vec::with_capacity(Mode::ALL.len());
    for mode in Mode::ALL {
        let width = tab_label(mode).chars().count() as u16;
        if x + width > inner.right() {
            break;
        }
        tabs.push((Rect::new(x, inner.y, width, 1), mode));
        x += width + 1;
    }
    tabs
}

impl Widget for ModeTabs {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(Span::styled(TITLE, styles::accent_bold()));
        block.render(area, buf);

        for (rect, mode) in tab_layout(area) {
            let style = if mode == self.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            buf.set_line(rect.x, rect.y, &Line::styled(tab_label(mode), style), rect.width);
        }
    }
}
