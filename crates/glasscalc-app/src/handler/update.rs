//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, ServerStatus};
use glasscalc_core::prelude::*;
use glasscalc_core::AppPhase;

use super::{buttons, evaluation, expression, keys, mode, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Button(button) => match buttons::handle_button(state, button) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Expression Messages
        // ─────────────────────────────────────────────────────────
        Message::Append(symbol) => expression::append(state, &symbol),
        Message::ClearAll => expression::clear_all(state),
        Message::ClearEntry => expression::clear_entry(state),

        // ─────────────────────────────────────────────────────────
        // Evaluation Messages
        // ─────────────────────────────────────────────────────────
        Message::Evaluate => evaluation::evaluate_expression(state),
        Message::ApplyFunction(function) => evaluation::evaluate_function(state, function),
        Message::EvaluationCompleted {
            request_id,
            outcome,
        } => evaluation::handle_completed(state, request_id, outcome),
        Message::ErrorExpired { generation } => evaluation::handle_error_expired(state, generation),

        Message::ServerHealthChecked { online } => {
            state.server = if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            };
            if !online {
                warn!("Evaluation service is not reachable");
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Mode Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectMode(m) => mode::select_mode(state, m),
        Message::NextMode => mode::select_mode(state, state.mode.next()),
        Message::PreviousMode => mode::select_mode(state, state.mode.previous()),
    }
}
