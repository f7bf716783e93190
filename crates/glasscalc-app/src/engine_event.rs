//! Events emitted by the Engine for external consumers
//!
//! Broadcast after each message processing cycle via `Engine::subscribe()`.
//! The headless runner turns these into NDJSON lines.

use crate::state::{DisplayView, ServerStatus};
use glasscalc_core::Mode;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Display text or visual flags changed
    DisplayChanged { view: DisplayView, mode: Mode },

    /// Result of the startup health probe
    ServerStatusChanged { status: ServerStatus },

    /// Engine is shutting down
    Shutdown,
}
