//! Cancellable flip timer for the result card

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use mood_core::prelude::*;

use crate::message::Message;

/// Send `FlipCard { card_id }` after `delay_ms` unless `cancel` fires first.
///
/// The card's state holds the sender. Closing or replacing the card sends
/// `true` (or drops the sender), which ends the task without a message.
pub(super) fn spawn_flip_timer(
    card_id: u64,
    delay_ms: u64,
    mut cancel: watch::Receiver<bool>,
    msg_tx: mpsc::Sender<Message>,
) {
    debug!("Flip for card {} scheduled in {}ms", card_id, delay_ms);

    tokio::spawn(async move {
        if *cancel.borrow() {
            return;
        }

        tokio::select! {
            _ = tokio::time::sleep(Duration::from_millis(delay_ms)) => {
                let _ = msg_tx.send(Message::FlipCard { card_id }).await;
            }
            _ = wait_for_cancel(&mut cancel) => {
                debug!("Flip for card {} cancelled before firing", card_id);
            }
        }
    });
}

/// Resolves once the value turns true or the sender goes away
async fn wait_for_cancel(cancel: &mut watch::Receiver<bool>) {
    while !*cancel.borrow_and_update() {
        if cancel.changed().await.is_err() {
            return;
        }
    }
}
