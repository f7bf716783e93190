//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every spawned task reports back by sending a [`Message`]; none of them
//! touch [`crate::state::AppState`] directly.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler::{Task, UpdateAction};
use crate::message::Message;
use glasscalc_core::prelude::*;
use glasscalc_core::EvalOutcome;
use glasscalc_remote::{reply_to_outcome, RemoteEvaluator};

/// Execute an action by spawning a background task
pub fn handle_action<E>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, evaluator: Arc<E>)
where
    E: RemoteEvaluator + Sync + 'static,
{
    match action {
        UpdateAction::SpawnTask(task) => {
            tokio::spawn(async move {
                execute_task(task, msg_tx, evaluator).await;
            });
        }

        UpdateAction::ScheduleErrorExpiry { generation, delay } => {
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = msg_tx.send(Message::ErrorExpired { generation }).await;
            });
        }

        UpdateAction::CheckServerHealth => {
            tokio::spawn(async move {
                let online = evaluator.health().await;
                info!("Evaluation service health: {}", if online { "online" } else { "offline" });
                let _ = msg_tx.send(Message::ServerHealthChecked { online }).await;
            });
        }
    }
}

/// Run one remote call and report its outcome
pub async fn execute_task<E>(task: Task, msg_tx: mpsc::Sender<Message>, evaluator: Arc<E>)
where
    E: RemoteEvaluator + Sync + 'static,
{
    let guard = CompletionGuard::new(task.request_id(), msg_tx);

    let reply = match &task {
        Task::Calculate { request, .. } => evaluator.calculate(request).await,
        Task::CalculateFunction { request, .. } => evaluator.calculate_function(request).await,
    };

    guard.report(reply_to_outcome(reply)).await;
}

/// Reports exactly one completion for a request.
///
/// If the owning task ends without calling [`CompletionGuard::report`]
/// (panic or abort), dropping the guard reports a network error so the
/// in-flight state is always released.
pub(crate) struct CompletionGuard {
    request_id: u64,
    msg_tx: Option<mpsc::Sender<Message>>,
}

impl CompletionGuard {
    pub(crate) fn new(request_id: u64, msg_tx: mpsc::Sender<Message>) -> Self {
        Self {
            request_id,
            msg_tx: Some(msg_tx),
        }
    }

    pub(crate) async fn report(mut self, outcome: EvalOutcome) {
        if let Some(tx) = self.msg_tx.take() {
            let msg = Message::EvaluationCompleted {
                request_id: self.request_id,
                outcome,
            };
            if tx.send(msg).await.is_err() {
                debug!("Message channel closed before request {} completed", self.request_id);
            }
        }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.msg_tx.take() {
            warn!("Request {} ended without a reply", self.request_id);
            let _ = tx.try_send(Message::EvaluationCompleted {
                request_id: self.request_id,
                outcome: EvalOutcome::network_error(),
            });
        }
    }
}
