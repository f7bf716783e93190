//! Keyboard routing
//!
//! Every key except Ctrl+C is dropped while an evaluation is in flight.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use glasscalc_core::{CalcFunction, Mode};

/// Convert a key event to a message for the current state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.is_evaluating() {
        return None;
    }

    match key {
        InputKey::Char(c @ ('0'..='9' | '.' | '+' | '-' | '*' | '/')) => {
            Some(Message::Append(c.to_string()))
        }
        InputKey::Char(c @ ('(' | ')')) if state.mode.allows_grouping() => {
            Some(Message::Append(c.to_string()))
        }

        InputKey::Enter | InputKey::Char('=') => Some(Message::Evaluate),
        InputKey::Esc => Some(Message::ClearAll),
        InputKey::Backspace => Some(Message::ClearEntry),

        // Power shortcut squares the display value
        InputKey::Char('^') if state.mode.allows_function(CalcFunction::Power) => {
            Some(Message::ApplyFunction(CalcFunction::Power))
        }

        InputKey::F(n) => Mode::from_ordinal(n).map(Message::SelectMode),
        InputKey::Tab => Some(Message::NextMode),
        InputKey::BackTab => Some(Message::PreviousMode),

        _ => None,
    }
}
