//! Test utilities for evaluator consumers
//!
//! [`ScriptedEvaluator`] answers calls from a queue of canned replies and
//! records every request it receives.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

use glasscalc_core::prelude::*;

use super::evaluator::RemoteEvaluator;
use super::protocol::{CalculateRequest, FunctionRequest, ServiceReply};

/// A request seen by [`ScriptedEvaluator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    Calculate(CalculateRequest),
    Function(FunctionRequest),
}

/// One canned reply
#[derive(Debug)]
pub enum ScriptedReply {
    Value(serde_json::Number),
    Rejected(Option<String>),
    TransportFailure,
}

impl ScriptedReply {
    fn into_result(self) -> Result<ServiceReply> {
        match self {
            ScriptedReply::Value(n) => Ok(ServiceReply::Value(n)),
            ScriptedReply::Rejected(msg) => Ok(ServiceReply::Rejected(msg)),
            ScriptedReply::TransportFailure => Err(Error::transport("scripted failure")),
        }
    }
}

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<ScriptedReply>,
    requests: Vec<RecordedRequest>,
}

/// Evaluator answering from a script.
///
/// When the script runs dry, calls fail with a transport error. With
/// [`ScriptedEvaluator::gated`] every call waits for [`ScriptedEvaluator::release`]
/// before answering, which lets tests observe the pending state.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvaluator {
    script: Arc<Mutex<Script>>,
    gate: Option<Arc<Notify>>,
    healthy: bool,
}

impl ScriptedEvaluator {
    pub fn new() -> Self {
        Self {
            healthy: true,
            ..Self::default()
        }
    }

    /// Calls block until [`release`](Self::release) is called once per call
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Notify::new())),
            healthy: true,
            ..Self::default()
        }
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn push_value(&self, value: impl Into<serde_json::Number>) -> &Self {
        self.push(ScriptedReply::Value(value.into()))
    }

    pub fn push_rejection(&self, message: &str) -> &Self {
        self.push(ScriptedReply::Rejected(Some(message.to_string())))
    }

    pub fn push_transport_failure(&self) -> &Self {
        self.push(ScriptedReply::TransportFailure)
    }

    pub fn push(&self, reply: ScriptedReply) -> &Self {
        self.lock().replies.push_back(reply);
        self
    }

    /// Let one gated call answer
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// All requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn answer(&self, request: RecordedRequest) -> Result<ServiceReply> {
        self.lock().requests.push(request);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let reply = self.lock().replies.pop_front();
        reply
            .map(ScriptedReply::into_result)
            .unwrap_or_else(|| Err(Error::transport("no scripted reply")))
    }
}

impl RemoteEvaluator for ScriptedEvaluator {
    async fn calculate(&self, request: &CalculateRequest) -> Result<ServiceReply> {
        self.answer(RecordedRequest::Calculate(request.clone()))
            .await
    }

    async fn calculate_function(&self, request: &FunctionRequest) -> Result<ServiceReply> {
        self.answer(RecordedRequest::Function(request.clone()))
            .await
    }

    async fn health(&self) -> bool {
        self.healthy
    }
}
