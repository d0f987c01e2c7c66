//! Background guidance requests and the startup health probe

use std::sync::Arc;

use tokio::sync::mpsc;

use mood_client::GuidanceClient;
use mood_core::prelude::*;

use crate::message::Message;

/// Fetch guidance for `mood` and report the outcome tagged with `request_id`
pub(super) fn spawn_fetch<C>(
    client: Arc<C>,
    request_id: u64,
    mood: String,
    msg_tx: mpsc::Sender<Message>,
) where
    C: GuidanceClient + Sync + 'static,
{
    tokio::spawn(async move {
        let message = match client.fetch_guidance(&mood).await {
            Ok(result) => Message::GuidanceReceived { request_id, result },
            Err(error) => Message::GuidanceFailed { request_id, error },
        };

        if msg_tx.send(message).await.is_err() {
            debug!("Guidance {} finished after the app shut down", request_id);
        }
    });
}

/// Probe the backend once; failure only changes the header indicator
pub(super) fn spawn_health_check<C>(client: Arc<C>, msg_tx: mpsc::Sender<Message>)
where
    C: GuidanceClient + Sync + 'static,
{
    tokio::spawn(async move {
        let error = client.health().await.err();
        let _ = msg_tx.send(Message::HealthChecked { error }).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_client::test_utils::{sample_guidance, ScriptedGuidanceClient};
    use mood_core::FetchError;

    #[tokio::test]
    async fn test_spawn_fetch_reports_success_with_request_id() {
        let client = Arc::new(ScriptedGuidanceClient::new().reply("khush", sample_guidance()));
        let (tx, mut rx) = mpsc::channel(4);

        spawn_fetch(client.clone(), 9, "khush".to_string(), tx);

        match rx.recv().await {
            Some(Message::GuidanceReceived { request_id, result }) => {
                assert_eq!(request_id, 9);
                assert_eq!(result, sample_guidance());
            }
            other => panic!("unexpected message {:?}", other),
        }
        assert_eq!(client.calls(), vec!["khush".to_string()]);
    }

    #[tokio::test]
    async fn test_spawn_fetch_reports_failure() {
        let client = Arc::new(ScriptedGuidanceClient::failing(FetchError::status(
            500, "boom",
        )));
        let (tx, mut rx) = mpsc::channel(4);

        spawn_fetch(client, 2, "sad".to_string(), tx);

        match rx.recv().await {
            Some(Message::GuidanceFailed { request_id, error }) => {
                assert_eq!(request_id, 2);
                assert_eq!(error.status_code(), Some(500));
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_spawn_fetch_survives_closed_channel() {
        let client = Arc::new(ScriptedGuidanceClient::always(sample_guidance()));
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        spawn_fetch(client.clone(), 1, "sad".to_string(), tx);
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
    }

    #[tokio::test]
    async fn test_health_check_reports_outcome() {
        let (tx, mut rx) = mpsc::channel(4);
        spawn_health_check(Arc::new(ScriptedGuidanceClient::new()), tx.clone());
        assert!(matches!(
            rx.recv().await,
            Some(Message::HealthChecked { error: None })
        ));

        let down = ScriptedGuidanceClient::failing(FetchError::transport("refused"));
        spawn_health_check(Arc::new(down), tx);
        assert!(matches!(
            rx.recv().await,
            Some(Message::HealthChecked { error: Some(_) })
        ));
    }
}
