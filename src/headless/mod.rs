//! Headless mode - NDJSON display events for scripting and E2E testing
//!
//! Reads one logical key per stdin line and writes one JSON object per line
//! to stdout whenever the display, the mode or the service status changes.
//!
//! # Example Output
//!
//! ```json
//! {"event":"display","text":"0","error":false,"loading":false,"mode":1,"timestamp":1704700001000}
//! {"event":"display","text":"5+3","error":false,"loading":true,"mode":1,"timestamp":1704700002000}
//! {"event":"display","text":"8","error":false,"loading":false,"mode":1,"timestamp":1704700002040}
//! ```

pub mod runner;

use std::io::Write;

use chrono::Utc;
use glasscalc_app::{DisplayView, EngineEvent, ServerStatus};
use glasscalc_core::Mode;
use serde::Serialize;
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// What the display shows right now
    Display {
        text: String,
        error: bool,
        loading: bool,
        mode: u8,
        timestamp: i64,
    },

    /// Result of the service health probe
    Server { online: bool, timestamp: i64 },

    /// Headless run is ending
    Shutdown { timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn emit_to<W: Write>(&self, out: &mut W) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn display(view: &DisplayView, mode: Mode) -> Self {
        Self::Display {
            text: view.text.clone(),
            error: view.error,
            loading: view.loading,
            mode: mode.ordinal(),
            timestamp: Self::now(),
        }
    }

    pub fn shutdown() -> Self {
        Self::Shutdown {
            timestamp: Self::now(),
        }
    }

    /// Map an engine event; `None` for nothing worth reporting
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::DisplayChanged { view, mode } => Some(Self::display(view, *mode)),
            EngineEvent::ServerStatusChanged { status } => match status {
                ServerStatus::Online => Some(Self::Server {
                    online: true,
                    timestamp: Self::now(),
                }),
                ServerStatus::Offline => Some(Self::Server {
                    online: false,
                    timestamp: Self::now(),
                }),
                ServerStatus::Unknown => None,
            },
            EngineEvent::Shutdown => Some(Self::shutdown()),
        }
    }
}
