//! Message processing
//!
//! Runs a message through the TEA update function, dispatches the resulting
//! actions and follows up messages until the chain ends.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use glasscalc_remote::RemoteEvaluator;

/// Process a message through the TEA update function
pub fn process_message<E>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    evaluator: &Arc<E>,
) where
    E: RemoteEvaluator + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), evaluator.clone());
        }

        msg = result.message;
    }
}
