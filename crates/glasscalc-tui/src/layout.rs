//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Mode tabs
    pub header: Rect,

    /// Display panel
    pub display: Rect,

    /// Keypad grid
    pub keypad: Rect,

    /// One-line status bar
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container with tabs)
        Constraint::Length(5), // Display (glass container, value on the middle row)
        Constraint::Min(5),    // Keypad
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        display: chunks[1],
        keypad: chunks[2],
        status: chunks[3],
    }
}
