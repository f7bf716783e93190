//! Abstract input key event, independent of terminal library.
//!
//! `InputKey` abstracts keyboard input from the underlying terminal library
//! (crossterm) so the router can be driven by the TUI, the headless stdin
//! reader, or tests without depending on crossterm.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (digits, operators, parentheses, `^`, `=`)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c)
    CharCtrl(char),

    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Backspace key
    Backspace,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Parse a logical key name as delivered by non-terminal input sources.
    ///
    /// Accepts single characters and the names `Enter`, `Escape`/`Esc`,
    /// `Backspace`, `Tab`, `BackTab`, `F1`..`F12` and `Ctrl+<c>`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Enter" => return Some(InputKey::Enter),
            "Escape" | "Esc" => return Some(InputKey::Esc),
            "Backspace" => return Some(InputKey::Backspace),
            "Tab" => return Some(InputKey::Tab),
            "BackTab" => return Some(InputKey::BackTab),
            _ => {}
        }

        if let Some(c) = name.strip_prefix("Ctrl+").and_then(single_char) {
            return Some(InputKey::CharCtrl(c));
        }

        if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
            if (1..=12).contains(&n) {
                return Some(InputKey::F(n));
            }
        }

        single_char(name).map(InputKey::Char)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
