//! Message processing
//!
//! Runs a message through the TEA update function, follows up any chained
//! messages, and hands the resulting actions to the action layer.

use std::sync::Arc;

use tokio::sync::mpsc;

use mood_client::GuidanceClient;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<C>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &Arc<C>,
) where
    C: GuidanceClient + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), client.clone());
        }

        msg = result.message;
    }
}
