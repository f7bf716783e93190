//! Remote evaluation abstraction
//!
//! The [`RemoteEvaluator`] trait is the seam between the orchestrator and the
//! service. The TUI and headless runners use [`crate::HttpEvaluator`]; tests
//! use the scripted evaluator from `test_utils`.

use glasscalc_core::prelude::*;
use glasscalc_core::{number_to_display, EvalOutcome};

use crate::protocol::{CalculateRequest, FunctionRequest, ServiceReply};

/// Operations offered by the evaluation service
#[trait_variant::make(RemoteEvaluator: Send)]
pub trait LocalRemoteEvaluator {
    /// Evaluate a full expression
    async fn calculate(&self, request: &CalculateRequest) -> Result<ServiceReply>;

    /// Apply a unary function to a value
    async fn calculate_function(&self, request: &FunctionRequest) -> Result<ServiceReply>;

    /// Whether the service answers its health endpoint
    async fn health(&self) -> bool;
}

/// Collapse a service call into the outcome the display understands.
///
/// Transport and protocol errors are logged and reported as a network error;
/// a rejection carries the service's message.
pub fn reply_to_outcome(reply: Result<ServiceReply>) -> EvalOutcome {
    match reply {
        Ok(ServiceReply::Value(n)) => EvalOutcome::Succeeded(number_to_display(&n)),
        Ok(ServiceReply::Rejected(message)) => EvalOutcome::application_error(message),
        Err(e) => {
            warn!("Evaluation call failed: {}", e);
            EvalOutcome::network_error()
        }
    }
}
