//! On-screen keypad routing

use crate::keypad::Button;
use crate::message::Message;
use crate::state::AppState;

/// Convert a button press to a message for the current state.
///
/// Presses are dropped while an evaluation is in flight and when the button
/// is not part of the active mode's keypad.
pub fn handle_button(state: &AppState, button: Button) -> Option<Message> {
    if state.is_evaluating() || !button.available_in(state.mode) {
        return None;
    }

    let msg = match button {
        Button::Digit(d) => Message::Append(d.to_string()),
        Button::Decimal => Message::Append(".".to_string()),
        Button::Operator(op) => Message::Append(op.glyph().to_string()),
        Button::OpenParen => Message::Append("(".to_string()),
        Button::CloseParen => Message::Append(")".to_string()),
        Button::Equals => Message::Evaluate,
        Button::Clear => Message::ClearAll,
        Button::ClearEntry => Message::ClearEntry,
        Button::Function(function) => Message::ApplyFunction(function),
        Button::Mode(mode) => Message::SelectMode(mode),
    };
    Some(msg)
}
