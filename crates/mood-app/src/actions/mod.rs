//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use mood_client::GuidanceClient;

use crate::message::Message;
use crate::UpdateAction;

pub(crate) mod flip;
pub(crate) mod guidance;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Arc<C>)
where
    C: GuidanceClient + Sync + 'static,
{
    match action {
        UpdateAction::FetchGuidance { request_id, mood } => {
            guidance::spawn_fetch(client, request_id, mood, msg_tx);
        }

        UpdateAction::ScheduleFlip {
            card_id,
            delay_ms,
            cancel,
        } => {
            flip::spawn_flip_timer(card_id, delay_ms, cancel, msg_tx);
        }

        UpdateAction::CheckHealth => {
            guidance::spawn_health_check(client, msg_tx);
        }
    }
}
