//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::keypad::Button;
use glasscalc_core::{CalcFunction, EvalOutcome, Mode};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal or headless input
    Key(InputKey),

    /// Pointer press on an on-screen button
    Button(Button),

    /// Tick event for periodic updates
    Tick,

    /// Force quit (Ctrl+C, signal handler, end of headless input)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Expression Messages
    // ─────────────────────────────────────────────────────────
    /// Append a symbol to the expression
    Append(String),

    /// Reset expression, display and flags
    ClearAll,

    /// Remove the last character of the expression
    ClearEntry,

    // ─────────────────────────────────────────────────────────
    // Evaluation Messages
    // ─────────────────────────────────────────────────────────
    /// Send the current expression to the service
    Evaluate,

    /// Send the current display value through a unary function
    ApplyFunction(CalcFunction),

    /// A remote call finished
    EvaluationCompleted {
        request_id: u64,
        outcome: EvalOutcome,
    },

    /// An error display deadline passed
    ErrorExpired { generation: u64 },

    /// Startup health probe finished
    ServerHealthChecked { online: bool },

    // ─────────────────────────────────────────────────────────
    // Mode Messages
    // ─────────────────────────────────────────────────────────
    /// Switch mode (resets all other state)
    SelectMode(Mode),

    /// Switch to the next mode, wrapping
    NextMode,

    /// Switch to the previous mode, wrapping
    PreviousMode,
}
