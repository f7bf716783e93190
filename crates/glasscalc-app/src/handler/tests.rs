//! Tests for handler module

use std::time::Duration;

use super::*;
use crate::input_key::InputKey;
use crate::keypad::Button;
use crate::message::Message;
use crate::state::{AppState, EvaluationKind, EvaluationPhase, ServerStatus};
use glasscalc_core::{AppPhase, CalcFunction, EvalOutcome, Mode, Operator};

/// Run a message and its follow-ups through update, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

fn key(state: &mut AppState, k: InputKey) -> Vec<UpdateAction> {
    run(state, Message::Key(k))
}

fn type_keys(state: &mut AppState, text: &str) {
    for c in text.chars() {
        let actions = key(state, InputKey::Char(c));
        assert!(actions.is_empty(), "typing {c:?} produced {actions:?}");
    }
}

fn state_in(mode: Mode) -> AppState {
    let mut state = AppState::new();
    run(&mut state, Message::SelectMode(mode));
    state
}

/// Evaluate and return the spawned task's request id
fn start_evaluation(state: &mut AppState) -> u64 {
    match key(state, InputKey::Enter).as_slice() {
        [UpdateAction::SpawnTask(task)] => task.request_id(),
        other => panic!("expected one spawned task, got {other:?}"),
    }
}

fn complete(state: &mut AppState, request_id: u64, outcome: EvalOutcome) -> Vec<UpdateAction> {
    run(
        state,
        Message::EvaluationCompleted {
            request_id,
            outcome,
        },
    )
}

fn expiry_generation(actions: &[UpdateAction]) -> u64 {
    match actions {
        [UpdateAction::ScheduleErrorExpiry { generation, delay }] => {
            assert_eq!(*delay, Duration::from_millis(2000));
            *generation
        }
        other => panic!("expected one expiry, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_ctrl_c_quits_even_while_evaluating() {
    let mut state = AppState::new();
    type_keys(&mut state, "1+1");
    start_evaluation(&mut state);

    key(&mut state, InputKey::CharCtrl('c'));

    assert!(state.should_quit());
}

#[test]
fn test_health_check_sets_server_status() {
    let mut state = AppState::new();
    assert_eq!(state.server, ServerStatus::Unknown);

    update(&mut state, Message::ServerHealthChecked { online: true });
    assert_eq!(state.server, ServerStatus::Online);

    update(&mut state, Message::ServerHealthChecked { online: false });
    assert_eq!(state.server, ServerStatus::Offline);
}

// ─────────────────────────────────────────────────────────
// Expression building
// ─────────────────────────────────────────────────────────

#[test]
fn test_digits_append_to_expression_and_display() {
    let mut state = AppState::new();
    type_keys(&mut state, "12+3");

    assert_eq!(state.expression, "12+3");
    assert_eq!(state.display, "12+3");
    assert_eq!(state.display_view().text, "12+3");
}

#[test]
fn test_second_decimal_in_one_number_is_rejected() {
    let mut state = AppState::new();
    type_keys(&mut state, "1.2.3");
    assert_eq!(state.expression, "1.23");

    type_keys(&mut state, "+4.5.");
    assert_eq!(state.expression, "1.23+4.5");
}

#[test]
fn test_no_token_ever_has_two_decimals() {
    let inputs = ["..1..2", "1.+.2.", "0...0", "3.1.4.1.5", "9.+8.×7..", "1.(2.)3."];
    for input in inputs {
        let mut state = state_in(Mode::Advanced);
        for c in input.chars() {
            let symbol = match c {
                '×' => Operator::Multiply.glyph().to_string(),
                c => c.to_string(),
            };
            run(&mut state, Message::Append(symbol));
        }

        for token in state
            .expression
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
        {
            assert!(
                token.matches('.').count() <= 1,
                "{input:?} produced {:?}",
                state.expression
            );
        }
    }
}

#[test]
fn test_digit_replaces_lone_zero() {
    for d in '0'..='9' {
        let mut state = AppState::new();
        type_keys(&mut state, "0");
        type_keys(&mut state, &d.to_string());
        assert_eq!(state.expression, d.to_string());
    }
}

#[test]
fn test_decimal_extends_lone_zero() {
    let mut state = AppState::new();
    type_keys(&mut state, "0.");
    assert_eq!(state.expression, "0.");
    assert_eq!(state.display, "0.");
}

#[test]
fn test_operator_replaces_lone_zero() {
    // A bare "0" is replaced by any symbol other than "."
    let mut state = AppState::new();
    type_keys(&mut state, "0-");
    assert_eq!(state.expression, "-");
}

#[test]
fn test_parentheses_need_advanced_mode() {
    let mut state = AppState::new();
    type_keys(&mut state, "(");
    assert_eq!(state.expression, "");

    run(&mut state, Message::Append("(".to_string()));
    assert_eq!(state.expression, "");

    let mut state = state_in(Mode::Advanced);
    type_keys(&mut state, "(1+2)");
    assert_eq!(state.expression, "(1+2)");
}

#[test]
fn test_power_operator_needs_advanced_mode() {
    let mut state = AppState::new();
    run(&mut state, Message::Append("2".to_string()));
    run(&mut state, Message::Append("**".to_string()));
    assert_eq!(state.expression, "2");

    let mut state = state_in(Mode::Scientific);
    run(&mut state, Message::Append("2".to_string()));
    run(&mut state, Message::Append("**".to_string()));
    assert_eq!(state.expression, "2**");
}

#[test]
fn test_unknown_symbols_are_rejected() {
    let mut state = AppState::new();
    run(&mut state, Message::Append("x".to_string()));
    run(&mut state, Message::Append("12".to_string()));
    assert_eq!(state.expression, "");
    assert_eq!(state.display, "0");
}

#[test]
fn test_clear_all_resets_everything() {
    let mut state = AppState::new();
    type_keys(&mut state, "12+3");

    key(&mut state, InputKey::Esc);

    assert_eq!(state.expression, "");
    assert_eq!(state.display, "0");
    assert!(!state.just_calculated);
    assert!(!state.is_evaluating());
}

#[test]
fn test_clear_entry_drops_last_character() {
    let mut state = AppState::new();
    type_keys(&mut state, "12");

    key(&mut state, InputKey::Backspace);
    assert_eq!(state.expression, "1");
    assert_eq!(state.display, "1");

    key(&mut state, InputKey::Backspace);
    assert_eq!(state.expression, "");
    assert_eq!(state.display, "0");

    // Nothing left: no-op
    key(&mut state, InputKey::Backspace);
    assert_eq!(state.display, "0");
}

#[test]
fn test_clear_entry_removes_whole_glyph() {
    let mut state = AppState::new();
    type_keys(&mut state, "6");
    run(&mut state, Message::Button(Button::Operator(Operator::Divide)));
    assert_eq!(state.expression, "6÷");

    key(&mut state, InputKey::Backspace);
    assert_eq!(state.expression, "6");
}

#[test]
fn test_clear_entry_resets_result_shown_without_expression() {
    let mut state = AppState::new();
    state.display = "42".to_string();
    state.just_calculated = true;

    key(&mut state, InputKey::Backspace);

    assert_eq!(state.display, "0");
    assert!(!state.just_calculated);
}

// ─────────────────────────────────────────────────────────
// Evaluation
// ─────────────────────────────────────────────────────────

#[test]
fn test_successful_evaluation_scenario() {
    let mut state = AppState::new();
    type_keys(&mut state, "5+3");

    let actions = key(&mut state, InputKey::Enter);
    let request_id = match actions.as_slice() {
        [UpdateAction::SpawnTask(Task::Calculate {
            request_id,
            request,
        })] => {
            assert_eq!(request.expression, "5+3");
            assert_eq!(request.calculator_type, 1);
            *request_id
        }
        other => panic!("unexpected actions {other:?}"),
    };
    assert!(state.is_evaluating());
    assert!(state.display_view().loading);

    let actions = complete(&mut state, request_id, EvalOutcome::Succeeded("8".to_string()));

    assert!(actions.is_empty());
    assert_eq!(state.display, "8");
    assert_eq!(state.expression, "8");
    assert!(state.just_calculated);
    assert!(!state.is_evaluating());
    assert!(!state.display_view().loading);
}

#[test]
fn test_equals_key_evaluates() {
    let mut state = AppState::new();
    type_keys(&mut state, "2*2");
    let actions = key(&mut state, InputKey::Char('='));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SpawnTask(Task::Calculate { .. })]
    ));
}

#[test]
fn test_empty_expression_does_not_evaluate() {
    let mut state = AppState::new();
    let actions = key(&mut state, InputKey::Enter);
    assert!(actions.is_empty());
    assert!(!state.is_evaluating());
}

#[test]
fn test_glyphs_are_normalized_in_request() {
    let mut state = AppState::new();
    type_keys(&mut state, "8");
    run(&mut state, Message::Button(Button::Operator(Operator::Divide)));
    type_keys(&mut state, "2");
    run(&mut state, Message::Button(Button::Operator(Operator::Multiply)));
    type_keys(&mut state, "3");
    assert_eq!(state.display, "8÷2×3");

    let actions = key(&mut state, InputKey::Enter);
    match actions.as_slice() {
        [UpdateAction::SpawnTask(Task::Calculate { request, .. })] => {
            assert_eq!(request.expression, "8/2*3");
        }
        other => panic!("unexpected actions {other:?}"),
    }
}

#[test]
fn test_operator_after_result_continues_from_result() {
    let mut state = AppState::new();
    type_keys(&mut state, "5+3");
    let id = start_evaluation(&mut state);
    complete(&mut state, id, EvalOutcome::Succeeded("8".to_string()));

    type_keys(&mut state, "*");

    assert_eq!(state.expression, "8*");
    assert!(!state.just_calculated);
}

#[test]
fn test_glyph_operator_after_result_continues_from_result() {
    let mut state = AppState::new();
    type_keys(&mut state, "5+3");
    let id = start_evaluation(&mut state);
    complete(&mut state, id, EvalOutcome::Succeeded("8".to_string()));

    run(&mut state, Message::Button(Button::Operator(Operator::Multiply)));

    assert_eq!(state.expression, "8×");
}

#[test]
fn test_digit_after_result_starts_new_expression() {
    let mut state = AppState::new();
    type_keys(&mut state, "5+3");
    let id = start_evaluation(&mut state);
    complete(&mut state, id, EvalOutcome::Succeeded("8".to_string()));

    type_keys(&mut state, "4");

    assert_eq!(state.expression, "4");
    assert_eq!(state.display, "4");
    assert!(!state.just_calculated);
}

#[test]
fn test_decimal_after_decimal_result_is_rejected() {
    let mut state = AppState::new();
    type_keys(&mut state, "5/2");
    let id = start_evaluation(&mut state);
    complete(&mut state, id, EvalOutcome::Succeeded("2.5".to_string()));

    type_keys(&mut state, ".");

    assert_eq!(state.expression, "2.5");
    assert!(state.just_calculated);
}

#[test]
fn test_input_is_ignored_while_evaluating() {
    let mut state = state_in(Mode::Scientific);
    type_keys(&mut state, "12+3");
    start_evaluation(&mut state);

    // Router drops every key
    for k in [
        InputKey::Char('4'),
        InputKey::Char('.'),
        InputKey::Backspace,
        InputKey::Esc,
        InputKey::Enter,
        InputKey::Char('^'),
        InputKey::F(1),
        InputKey::Tab,
    ] {
        assert!(key(&mut state, k).is_empty());
    }
    assert!(run(&mut state, Message::Button(Button::Digit('4'))).is_empty());

    // Operations themselves are no-ops too
    assert!(run(&mut state, Message::Append("4".to_string())).is_empty());
    assert!(run(&mut state, Message::ClearEntry).is_empty());
    assert!(run(&mut state, Message::Evaluate).is_empty());
    assert!(run(&mut state, Message::ApplyFunction(CalcFunction::Sin)).is_empty());

    assert_eq!(state.expression, "12+3");
    assert_eq!(state.mode, Mode::Scientific);
    assert!(state.is_evaluating());
}

#[test]
fn test_in_flight_released_for_every_outcome() {
    let outcomes = [
        EvalOutcome::Succeeded("15".to_string()),
        EvalOutcome::application_error(Some("bad".to_string())),
        EvalOutcome::network_error(),
    ];

    for outcome in outcomes {
        let mut state = AppState::new();
        type_keys(&mut state, "12+3");
        let id = start_evaluation(&mut state);

        complete(&mut state, id, outcome.clone());

        assert!(!state.is_evaluating(), "still pending after {outcome:?}");
    }
}

#[test]
fn test_application_error_scenario() {
    let mut state = AppState::new();
    type_keys(&mut state, "5/0");
    let id = start_evaluation(&mut state);

    let actions = complete(
        &mut state,
        id,
        EvalOutcome::application_error(Some("division by zero".to_string())),
    );
    let generation = expiry_generation(&actions);

    let view = state.display_view();
    assert_eq!(view.text, "division by zero");
    assert!(view.error);
    assert!(!view.loading);
    assert_eq!(state.display, "0");
    assert_eq!(state.expression, "");

    run(&mut state, Message::ErrorExpired { generation });

    let view = state.display_view();
    assert_eq!(view.text, "0");
    assert!(!view.error);
    assert_eq!(state.expression, "");
}

#[test]
fn test_error_without_message_uses_fallback() {
    let mut state = AppState::new();
    type_keys(&mut state, "1+");
    let id = start_evaluation(&mut state);

    complete(&mut state, id, EvalOutcome::application_error(None));

    assert_eq!(state.display_view().text, "An unknown error occurred");
}

#[test]
fn test_network_error_message() {
    let mut state = AppState::new();
    type_keys(&mut state, "1+1");
    let id = start_evaluation(&mut state);

    complete(&mut state, id, EvalOutcome::network_error());

    let view = state.display_view();
    assert_eq!(view.text, "NETWORK ERROR");
    assert!(view.error);
}

#[test]
fn test_error_display_duration_comes_from_settings() {
    let mut state = AppState::new();
    state.settings.behavior.error_display_ms = 500;
    type_keys(&mut state, "1+1");
    let id = start_evaluation(&mut state);

    let actions = complete(&mut state, id, EvalOutcome::network_error());

    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::ScheduleErrorExpiry { delay, .. }] if *delay == Duration::from_millis(500)
    ));
}

#[test]
fn test_typing_supersedes_error() {
    let mut state = AppState::new();
    type_keys(&mut state, "5/0");
    let id = start_evaluation(&mut state);
    let generation = expiry_generation(&complete(
        &mut state,
        id,
        EvalOutcome::application_error(Some("division by zero".to_string())),
    ));

    type_keys(&mut state, "7");
    assert_eq!(state.display_view().text, "7");
    assert!(!state.display_view().error);

    // The stale deadline must not wipe the new input
    run(&mut state, Message::ErrorExpired { generation });
    assert_eq!(state.expression, "7");
}

#[test]
fn test_newer_error_supersedes_older_deadline() {
    let mut state = AppState::new();
    type_keys(&mut state, "1+1");
    let id = start_evaluation(&mut state);
    let first = expiry_generation(&complete(&mut state, id, EvalOutcome::network_error()));

    type_keys(&mut state, "2+2");
    let id = start_evaluation(&mut state);
    let second = expiry_generation(&complete(
        &mut state,
        id,
        EvalOutcome::application_error(Some("second".to_string())),
    ));
    assert_ne!(first, second);

    run(&mut state, Message::ErrorExpired { generation: first });
    assert_eq!(state.display_view().text, "second");

    run(&mut state, Message::ErrorExpired { generation: second });
    assert_eq!(state.display_view().text, "0");
}

#[test]
fn test_stale_completion_is_discarded() {
    let mut state = AppState::new();
    type_keys(&mut state, "1+1");
    let id = start_evaluation(&mut state);

    complete(&mut state, id + 1, EvalOutcome::Succeeded("99".to_string()));

    assert!(state.is_evaluating());
    assert_eq!(state.expression, "1+1");
    assert_eq!(state.display, "1+1");
    assert!(!state.just_calculated);
}

#[test]
fn test_completion_after_mode_switch_is_discarded() {
    let mut state = AppState::new();
    type_keys(&mut state, "1+1");
    let id = start_evaluation(&mut state);

    // Mode switch is an explicit reset; it is not gated at the message level
    run(&mut state, Message::SelectMode(Mode::Advanced));
    complete(&mut state, id, EvalOutcome::Succeeded("2".to_string()));

    assert_eq!(state.display, "0");
    assert!(!state.just_calculated);
}

// ─────────────────────────────────────────────────────────
// Functions
// ─────────────────────────────────────────────────────────

#[test]
fn test_sqrt_of_zero_sends_nothing() {
    let mut state = state_in(Mode::Advanced);

    let actions = run(&mut state, Message::ApplyFunction(CalcFunction::Sqrt));

    assert!(actions.is_empty());
    assert!(!state.is_evaluating());
    assert_eq!(state.display, "0");
    assert_eq!(state.expression, "");
}

#[test]
fn test_zero_rejecting_functions_are_noops_on_zero() {
    let mut state = state_in(Mode::Scientific);
    for function in [
        CalcFunction::Log,
        CalcFunction::Ln,
        CalcFunction::Sqrt,
        CalcFunction::Factorial,
    ] {
        assert!(run(&mut state, Message::ApplyFunction(function)).is_empty());
    }

    // Other functions are fine on zero
    let actions = run(&mut state, Message::ApplyFunction(CalcFunction::Cos));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SpawnTask(Task::CalculateFunction { .. })]
    ));
}

#[test]
fn test_function_uses_display_value() {
    let mut state = state_in(Mode::Advanced);
    type_keys(&mut state, "16");

    let actions = run(&mut state, Message::Button(Button::Function(CalcFunction::Sqrt)));

    let request_id = match actions.as_slice() {
        [UpdateAction::SpawnTask(Task::CalculateFunction {
            request_id,
            request,
        })] => {
            assert_eq!(request.function, CalcFunction::Sqrt);
            assert_eq!(request.value, "16");
            assert_eq!(request.calculator_type, 2);
            *request_id
        }
        other => panic!("unexpected actions {other:?}"),
    };
    assert_eq!(
        state.evaluation,
        EvaluationPhase::Pending {
            request_id,
            kind: EvaluationKind::Function(CalcFunction::Sqrt),
        }
    );

    complete(&mut state, request_id, EvalOutcome::Succeeded("4".to_string()));
    assert_eq!(state.display, "4");
    assert_eq!(state.expression, "4");
    assert!(state.just_calculated);
}

#[test]
fn test_caret_squares_in_advanced_mode_only() {
    let mut state = AppState::new();
    type_keys(&mut state, "3");
    assert!(key(&mut state, InputKey::Char('^')).is_empty());

    let mut state = state_in(Mode::Advanced);
    type_keys(&mut state, "3");
    let actions = key(&mut state, InputKey::Char('^'));
    match actions.as_slice() {
        [UpdateAction::SpawnTask(Task::CalculateFunction { request, .. })] => {
            assert_eq!(request.function, CalcFunction::Power);
            assert_eq!(request.value, "3");
        }
        other => panic!("unexpected actions {other:?}"),
    }
}

#[test]
fn test_function_not_in_mode_is_rejected() {
    let mut state = state_in(Mode::Advanced);
    type_keys(&mut state, "1");

    assert!(run(&mut state, Message::ApplyFunction(CalcFunction::Sin)).is_empty());
    assert!(run(&mut state, Message::Button(Button::Function(CalcFunction::Sin))).is_empty());
    assert!(!state.is_evaluating());
}

#[test]
fn test_evaluation_start_supersedes_error() {
    let mut state = state_in(Mode::Scientific);
    type_keys(&mut state, "1+1");
    let id = start_evaluation(&mut state);
    let generation = expiry_generation(&complete(&mut state, id, EvalOutcome::network_error()));

    // cos(0) is allowed while the error is showing
    let actions = run(&mut state, Message::ApplyFunction(CalcFunction::Cos));
    assert_eq!(actions.len(), 1);
    assert!(!state.display_view().error);
    assert!(state.display_view().loading);

    // The old deadline must not cancel the new request
    run(&mut state, Message::ErrorExpired { generation });
    assert!(state.is_evaluating());
}

// ─────────────────────────────────────────────────────────
// Modes
// ─────────────────────────────────────────────────────────

#[test]
fn test_mode_switch_resets_state() {
    let mut state = AppState::new();
    type_keys(&mut state, "12+3");

    key(&mut state, InputKey::F(2));

    assert_eq!(state.mode, Mode::Advanced);
    assert_eq!(state.expression, "");
    assert_eq!(state.display, "0");
}

#[test]
fn test_tab_cycles_modes() {
    let mut state = AppState::new();
    key(&mut state, InputKey::Tab);
    assert_eq!(state.mode, Mode::Advanced);
    key(&mut state, InputKey::Tab);
    assert_eq!(state.mode, Mode::Scientific);
    key(&mut state, InputKey::Tab);
    assert_eq!(state.mode, Mode::Simple);
    key(&mut state, InputKey::BackTab);
    assert_eq!(state.mode, Mode::Scientific);
}

#[test]
fn test_mode_tab_button_selects_mode() {
    let mut state = AppState::new();
    run(&mut state, Message::Button(Button::Mode(Mode::Scientific)));
    assert_eq!(state.mode, Mode::Scientific);
}

#[test]
fn test_unknown_function_key_is_ignored() {
    let mut state = AppState::new();
    type_keys(&mut state, "7");
    assert!(key(&mut state, InputKey::F(4)).is_empty());
    assert_eq!(state.mode, Mode::Simple);
    assert_eq!(state.expression, "7");
}

// ─────────────────────────────────────────────────────────
// Keypad
// ─────────────────────────────────────────────────────────

#[test]
fn test_keypad_buttons_build_expression() {
    let mut state = state_in(Mode::Advanced);
    for b in [
        Button::OpenParen,
        Button::Digit('1'),
        Button::Decimal,
        Button::Digit('5'),
        Button::Operator(Operator::Add),
        Button::Digit('2'),
        Button::CloseParen,
        Button::Operator(Operator::Power),
        Button::Digit('2'),
    ] {
        run(&mut state, Message::Button(b));
    }
    assert_eq!(state.expression, "(1.5+2)**2");

    run(&mut state, Message::Button(Button::ClearEntry));
    assert_eq!(state.expression, "(1.5+2)**");

    run(&mut state, Message::Button(Button::Clear));
    assert_eq!(state.expression, "");
}

#[test]
fn test_button_not_on_keypad_is_rejected() {
    let mut state = AppState::new();
    assert!(handle_button(&state, Button::OpenParen).is_none());

    run(&mut state, Message::Button(Button::Function(CalcFunction::Sqrt)));
    assert!(!state.is_evaluating());
}

#[test]
fn test_equals_button_evaluates() {
    let mut state = AppState::new();
    run(&mut state, Message::Button(Button::Digit('9')));
    let actions = run(&mut state, Message::Button(Button::Equals));
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::SpawnTask(Task::Calculate { .. })]
    ));
}
