//! Remote evaluation lifecycle
//!
//! `Idle -> Pending -> (result | transient error) -> Idle`. The pending
//! request id ties a completion to the call that started it; anything else
//! is stale and dropped.

use std::time::Duration;

use crate::state::{AppState, EvaluationKind, EvaluationPhase, TransientError};
use glasscalc_core::prelude::*;
use glasscalc_core::{CalcFunction, EvalOutcome};
use glasscalc_remote::{CalculateRequest, FunctionRequest};

use super::{expression, Task, UpdateAction, UpdateResult};

/// Send the current expression to the service
pub fn evaluate_expression(state: &mut AppState) -> UpdateResult {
    if state.is_evaluating() || state.expression.is_empty() {
        return UpdateResult::none();
    }

    let request = CalculateRequest::new(&state.expression, state.mode);
    let request_id = begin(state, EvaluationKind::Expression);
    debug!("Evaluating {:?} (request {})", request.expression, request_id);

    UpdateResult::action(UpdateAction::SpawnTask(Task::Calculate {
        request_id,
        request,
    }))
}

/// Send the current display value through `function`
pub fn evaluate_function(state: &mut AppState, function: CalcFunction) -> UpdateResult {
    if state.is_evaluating() {
        return UpdateResult::none();
    }

    if !state.mode.allows_function(function) {
        debug!("Function {} not available in {} mode", function, state.mode);
        return UpdateResult::none();
    }

    if state.display == "0" && function.rejects_zero() {
        return UpdateResult::none();
    }

    let request = FunctionRequest::new(function, state.display.clone(), state.mode);
    let request_id = begin(state, EvaluationKind::Function(function));
    debug!("Applying {} to {:?} (request {})", function, request.value, request_id);

    UpdateResult::action(UpdateAction::SpawnTask(Task::CalculateFunction {
        request_id,
        request,
    }))
}

/// Enter the pending phase. A visible error is superseded by the loading state.
fn begin(state: &mut AppState, kind: EvaluationKind) -> u64 {
    let request_id = state.take_request_id();
    state.evaluation = EvaluationPhase::Pending { request_id, kind };
    state.refresh_display();
    request_id
}

/// Apply the outcome of a finished call
pub fn handle_completed(
    state: &mut AppState,
    request_id: u64,
    outcome: EvalOutcome,
) -> UpdateResult {
    match state.evaluation {
        EvaluationPhase::Pending {
            request_id: pending,
            ..
        } if pending == request_id => {}
        _ => {
            debug!("Discarding stale completion for request {}", request_id);
            return UpdateResult::none();
        }
    }

    state.evaluation = EvaluationPhase::Idle;

    match outcome {
        EvalOutcome::Succeeded(value) => {
            state.display = value.clone();
            state.expression = value;
            state.just_calculated = true;
            state.refresh_display();
            UpdateResult::none()
        }
        EvalOutcome::Failed { kind, message } => {
            info!("Evaluation failed ({:?}): {}", kind, message);
            raise_error(state, message)
        }
    }
}

/// Show `message` in place of the display and schedule its expiry
pub fn raise_error(state: &mut AppState, message: String) -> UpdateResult {
    state.error_generation += 1;
    let generation = state.error_generation;

    state.error = Some(TransientError {
        message,
        generation,
    });
    state.display = "0".to_string();
    state.expression.clear();

    UpdateResult::action(UpdateAction::ScheduleErrorExpiry {
        generation,
        delay: Duration::from_millis(state.settings.behavior.error_display_ms),
    })
}

/// Full clear when the error that scheduled this expiry is still showing
pub fn handle_error_expired(state: &mut AppState, generation: u64) -> UpdateResult {
    let current = state.error.as_ref().map(|e| e.generation);
    if current == Some(generation) {
        expression::clear_all(state)
    } else {
        UpdateResult::none()
    }
}
