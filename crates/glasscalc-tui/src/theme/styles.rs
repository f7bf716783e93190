//! Semantic style builders

use glasscalc_app::{Button, ServerStatus};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// "Black on Cyan" - the active mode tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Display styles ---
pub fn display_value() -> Style {
    text_primary().add_modifier(Modifier::BOLD)
}

pub fn display_error() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

pub fn display_loading() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Keypad ---

/// Label style for a keypad button, colored by group
pub fn key_label(button: Button) -> Style {
    let fg = match button {
        Button::Digit(_) | Button::Decimal => palette::TEXT_PRIMARY,
        Button::Operator(_) | Button::OpenParen | Button::CloseParen => palette::KEY_OPERATOR,
        Button::Function(_) => palette::KEY_FUNCTION,
        Button::Clear | Button::ClearEntry => palette::KEY_CLEAR,
        Button::Equals => palette::TEXT_PRIMARY,
        Button::Mode(_) => palette::TEXT_SECONDARY,
    };
    let bg = match button {
        Button::Equals => palette::KEY_EQUALS,
        _ => palette::KEY_BG,
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

// --- Server indicator ---

/// Returns `(icon, label, Style)` for the service reachability
pub fn server_indicator(status: ServerStatus) -> (&'static str, &'static str, Style) {
    match status {
        ServerStatus::Online => (
            "●",
            "Online",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        ServerStatus::Offline => (
            "✗",
            "Offline",
            Style::default().fg(palette::STATUS_RED),
        ),
        ServerStatus::Unknown => ("○", "Checking", text_muted()),
    }
}
