//! Main TUI runner - entry point and event loop

use glasscalc_app::Engine;
use glasscalc_core::prelude::*;
use glasscalc_remote::RemoteEvaluator;
use tracing::{info, warn};

use super::render::HitMap;
use super::{event, render, terminal};

/// Run the calculator in the terminal until the user quits
pub async fn run<E>(mut engine: Engine<E>) -> Result<()>
where
    E: RemoteEvaluator + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("{}; keypad clicks disabled", e);
    }

    engine.start();
    info!(
        "glasscalc started in {} mode against {}",
        engine.state.mode, engine.state.settings.server.url
    );

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    terminal::disable_mouse_capture();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<E>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<E>) -> Result<()>
where
    E: RemoteEvaluator + Sync + 'static,
{
    let mut hits = HitMap::default();

    while !engine.should_quit() {
        // Completions, expiries and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| hits = render::view(frame, &engine.state))?;

        if let Some(message) = event::poll(&hits)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
