//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Keyboard routing
//! - `buttons`: On-screen keypad routing
//! - `expression`: Expression building (append, clear)
//! - `evaluation`: Remote evaluation lifecycle and transient errors
//! - `mode`: Mode switching

pub(crate) mod buttons;
pub(crate) mod evaluation;
pub(crate) mod expression;
pub(crate) mod keys;
pub(crate) mod mode;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use std::time::Duration;

use crate::message::Message;
use glasscalc_remote::{CalculateRequest, FunctionRequest};

// Re-export main entry point
pub use update::update;

pub use buttons::handle_button;
pub use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Spawn a background task
    SpawnTask(Task),

    /// Report `ErrorExpired { generation }` after `delay`
    ScheduleErrorExpiry { generation: u64, delay: Duration },

    /// Probe the service health endpoint
    CheckServerHealth,
}

/// Background tasks to spawn
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    /// Evaluate an expression
    Calculate {
        request_id: u64,
        request: CalculateRequest,
    },
    /// Apply a unary function
    CalculateFunction {
        request_id: u64,
        request: FunctionRequest,
    },
}

impl Task {
    pub fn request_id(&self) -> u64 {
        match self {
            Task::Calculate { request_id, .. } | Task::CalculateFunction { request_id, .. } => {
                *request_id
            }
        }
    }
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
