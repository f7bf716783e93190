//! glasscalc-app - Application state and orchestration for glasscalc
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! calculator: expression building, mode control, the remote evaluation
//! lifecycle and input routing. It also provides the Engine shared by the
//! TUI and headless runners, and configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod keypad;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use keypad::{keypad_rows, Button};
pub use message::Message;
pub use state::{AppState, DisplayView, EvaluationPhase, ServerStatus};
