//! Terminal event polling

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use glasscalc_app::{InputKey, Message};
use glasscalc_core::prelude::*;

use crate::render::HitMap;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::F(n) => Some(InputKey::F(n)),
        _ => None,
    }
}

/// Resolve a pointer event against the last rendered frame
pub fn mouse_event_to_message(mouse: MouseEvent, hits: &HitMap) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hits.hit(mouse.column, mouse.row).map(Message::Button)
        }
        _ => None,
    }
}

/// Translate one terminal event
pub fn translate(event: Event, hits: &HitMap) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, hits),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(hits: &HitMap) -> Result<Option<Message>> {
    // 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(translate(event::read()?, hits))
    } else {
        Ok(Some(Message::Tick))
    }
}
