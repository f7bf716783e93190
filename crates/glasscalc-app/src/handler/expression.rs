//! Expression building: append, full clear and entry clear

use crate::state::{AppState, EvaluationPhase};
use glasscalc_core::prelude::*;
use glasscalc_core::Operator;

use super::UpdateResult;

/// Append a symbol to the expression.
///
/// Silently ignored while evaluating, when the symbol is not legal in the
/// active mode, or when it would put a second `.` into the current number.
pub fn append(state: &mut AppState, symbol: &str) -> UpdateResult {
    if state.is_evaluating() {
        return UpdateResult::none();
    }

    if !state.mode.allows_symbol(symbol) {
        debug!("Symbol {:?} not allowed in {} mode", symbol, state.mode);
        return UpdateResult::none();
    }

    if symbol == "." && trailing_number_has_decimal(&state.expression) {
        return UpdateResult::none();
    }

    if state.just_calculated {
        // An operator continues from the result, anything else starts over
        state.expression = if Operator::from_symbol(symbol).is_some() {
            format!("{}{}", state.display, symbol)
        } else {
            symbol.to_string()
        };
        state.just_calculated = false;
    } else if state.expression == "0" && symbol != "." {
        state.expression = symbol.to_string();
    } else {
        state.expression.push_str(symbol);
    }

    state.display = state.expression.clone();
    state.refresh_display();
    UpdateResult::none()
}

/// Reset expression, display and flags. Also releases the in-flight guard;
/// a reply arriving afterwards no longer matches and is discarded.
pub fn clear_all(state: &mut AppState) -> UpdateResult {
    state.expression.clear();
    state.display = "0".to_string();
    state.just_calculated = false;
    state.evaluation = EvaluationPhase::Idle;
    state.refresh_display();
    UpdateResult::none()
}

/// Remove the last character, or reset a bare result to "0".
pub fn clear_entry(state: &mut AppState) -> UpdateResult {
    if state.is_evaluating() {
        return UpdateResult::none();
    }

    if state.expression.pop().is_some() {
        state.display = if state.expression.is_empty() {
            "0".to_string()
        } else {
            state.expression.clone()
        };
        state.refresh_display();
    } else if state.display != "0" {
        state.display = "0".to_string();
        state.just_calculated = false;
        state.refresh_display();
    }

    UpdateResult::none()
}

/// Whether the run of digits and `.` at the end of `expression` already
/// contains a decimal point
fn trailing_number_has_decimal(expression: &str) -> bool {
    expression
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .any(|c| c == '.')
}
