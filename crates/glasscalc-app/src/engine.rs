//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel and the evaluator.
//! Frontends feed it messages and either render `state` directly (TUI) or
//! subscribe to [`EngineEvent`]s (headless).

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use crate::actions::handle_action;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::{AppState, DisplayView, ServerStatus};
use glasscalc_core::prelude::*;
use glasscalc_core::Mode;
use glasscalc_remote::RemoteEvaluator;

/// State captured around message processing for change detection
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    view: DisplayView,
    mode: Mode,
    server: ServerStatus,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            view: state.display_view(),
            mode: state.mode,
            server: state.server,
        }
    }
}

/// Orchestration engine for glasscalc
pub struct Engine<E> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    evaluator: Arc<E>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<E> Engine<E>
where
    E: RemoteEvaluator + Sync + 'static,
{
    /// Create an engine. Nothing is spawned until [`Engine::start`].
    pub fn new(settings: Settings, evaluator: E) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            evaluator: Arc::new(evaluator),
            event_tx,
        }
    }

    /// Spawn the signal handler and, if enabled, the startup health probe.
    /// Requires a tokio runtime.
    pub fn start(&mut self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
        if self.state.settings.behavior.check_health {
            self.check_server_health();
        }
    }

    /// Probe the service in the background; the result arrives as a message
    pub fn check_server_health(&self) {
        handle_action(
            UpdateAction::CheckServerHealth,
            self.msg_tx.clone(),
            self.evaluator.clone(),
        );
    }

    /// Subscribe to engine events
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.evaluator);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages. Returns how many were handled.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from any source
    pub async fn recv_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Current display projection
    pub fn display_view(&self) -> DisplayView {
        self.state.display_view()
    }

    /// Announce shutdown to subscribers
    pub fn shutdown(&self) {
        info!("Engine shutting down");
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.server != post.server {
            self.emit(EngineEvent::ServerStatusChanged {
                status: post.server,
            });
        }

        if pre.view != post.view || pre.mode != post.mode {
            self.emit(EngineEvent::DisplayChanged {
                view: post.view.clone(),
                mode: post.mode,
            });
        }
    }

    /// send() only fails when nobody is subscribed
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
