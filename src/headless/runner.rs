//! Headless mode runner - event loop without TUI

use std::io::{self, BufRead, Write};

use tokio::sync::{broadcast, mpsc};

use glasscalc_app::{Button, Engine, EngineEvent, InputKey, Message};
use glasscalc_core::prelude::*;
use glasscalc_core::{CalcFunction, Mode};
use glasscalc_remote::RemoteEvaluator;

use super::HeadlessEvent;

/// Input delivered by the stdin reader thread
#[derive(Debug)]
pub enum HeadlessInput {
    Command(Message),
    /// stdin reached end of file
    Closed,
}

enum Step {
    Engine(Option<Message>),
    Input(Option<HeadlessInput>),
}

/// Run in headless mode - NDJSON on stdout instead of the TUI
pub async fn run_headless<E>(mut engine: Engine<E>) -> Result<()>
where
    E: RemoteEvaluator + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("glasscalc starting in HEADLESS mode");
    info!("Service: {}", engine.state.settings.server.url);
    info!("═══════════════════════════════════════════════════════");

    let (input_tx, input_rx) = mpsc::channel::<HeadlessInput>(64);
    std::thread::spawn(move || {
        read_stdin_blocking(input_tx);
    });

    engine.start();

    let mut stdout = io::stdout();
    let result = headless_event_loop(&mut engine, input_rx, &mut stdout).await;

    info!("glasscalc headless mode exiting");
    result
}

/// Main headless event loop
///
/// Input is held back while an evaluation is outstanding, so a scripted
/// key sequence is never dropped by the router. Ends on `Quit`, or once
/// input is exhausted, no evaluation is pending and no error is showing.
pub async fn headless_event_loop<E, W>(
    engine: &mut Engine<E>,
    mut input_rx: mpsc::Receiver<HeadlessInput>,
    out: &mut W,
) -> Result<()>
where
    E: RemoteEvaluator + Sync + 'static,
    W: Write,
{
    let mut events = engine.subscribe();
    HeadlessEvent::display(&engine.display_view(), engine.state.mode).emit_to(out);

    let mut input_closed = false;

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }
        // An error on the display still has its expiry to report
        if input_closed && !engine.state.is_evaluating() && engine.state.error.is_none() {
            info!("Input exhausted");
            break;
        }

        let accepting = !input_closed && !engine.state.is_evaluating();
        let step = tokio::select! {
            msg = engine.msg_rx.recv() => Step::Engine(msg),
            input = input_rx.recv(), if accepting => Step::Input(input),
        };

        match step {
            Step::Engine(Some(msg)) => engine.process_message(msg),
            Step::Engine(None) => return Err(Error::ChannelClosed),
            Step::Input(Some(HeadlessInput::Command(msg))) => engine.process_message(msg),
            Step::Input(Some(HeadlessInput::Closed)) | Step::Input(None) => input_closed = true,
        }

        emit_pending(&mut events, out);
    }

    engine.shutdown();
    emit_pending(&mut events, out);

    Ok(())
}

fn emit_pending<W: Write>(events: &mut broadcast::Receiver<EngineEvent>, out: &mut W) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                    headless.emit_to(out);
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Parse one stdin line
///
/// Accepts key names understood by [`InputKey::from_name`], plus
/// `fn:<name>` (function button), `mode:<1-3>` (mode tab) and `quit`.
pub fn parse_command(line: &str) -> Option<Message> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line == "quit" {
        return Some(Message::Quit);
    }
    if let Some(name) = line.strip_prefix("fn:") {
        return CalcFunction::from_wire_name(name).map(|f| Message::Button(Button::Function(f)));
    }
    if let Some(ordinal) = line.strip_prefix("mode:") {
        return ordinal
            .parse::<u8>()
            .ok()
            .and_then(Mode::from_ordinal)
            .map(|m| Message::Button(Button::Mode(m)));
    }
    InputKey::from_name(line).map(Message::Key)
}

/// Read stdin line by line and forward parsed commands (blocking)
fn read_stdin_blocking(input_tx: mpsc::Sender<HeadlessInput>) {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let Some(msg) = parse_command(&line) else {
            if !line.trim().is_empty() {
                warn!("Unknown stdin command: {}", line.trim());
            }
            continue;
        };

        let quit = matches!(msg, Message::Quit);
        if input_tx.blocking_send(HeadlessInput::Command(msg)).is_err() {
            return;
        }
        if quit {
            info!("Stdin: quit requested");
            return;
        }
    }

    let _ = input_tx.blocking_send(HeadlessInput::Closed);
    info!("Stdin reader exiting");
}
