//! Test utilities for guidance client consumers
//!
//! Provides a scripted in-memory client that records every mood it was asked
//! for and answers from a table, optionally after a delay.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mood_core::{FetchError, GuidanceResult};

use crate::client::GuidanceClient;

type Reply = std::result::Result<GuidanceResult, FetchError>;

/// Guidance with single-letter fields, handy for assertions
pub fn sample_guidance() -> GuidanceResult {
    GuidanceResult {
        arabic: "A".to_string(),
        urdu: "U".to_string(),
        reference: "R".to_string(),
        explanation: "E".to_string(),
        kind: None,
    }
}

#[derive(Debug, Default)]
struct Script {
    replies: HashMap<String, Reply>,
    delays: HashMap<String, Duration>,
    fallback: Option<Reply>,
    healthy: bool,
    calls: Vec<String>,
}

/// In-memory [`GuidanceClient`] driven by a reply table.
///
/// Moods without a scripted reply get the fallback, or a 404 status error
/// when no fallback is set.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGuidanceClient {
    script: Arc<Mutex<Script>>,
}

impl ScriptedGuidanceClient {
    pub fn new() -> Self {
        let client = Self::default();
        client.lock().healthy = true;
        client
    }

    /// Every mood answers with `result`
    pub fn always(result: GuidanceResult) -> Self {
        let client = Self::new();
        client.lock().fallback = Some(Ok(result));
        client
    }

    /// Every mood fails with `error`
    pub fn failing(error: FetchError) -> Self {
        let client = Self::new();
        client.lock().fallback = Some(Err(error));
        client.lock().healthy = false;
        client
    }

    pub fn reply(self, mood: &str, result: GuidanceResult) -> Self {
        self.lock().replies.insert(mood.to_string(), Ok(result));
        self
    }

    pub fn reply_err(self, mood: &str, error: FetchError) -> Self {
        self.lock().replies.insert(mood.to_string(), Err(error));
        self
    }

    pub fn delay(self, mood: &str, delay: Duration) -> Self {
        self.lock().delays.insert(mood.to_string(), delay);
        self
    }

    /// Moods requested so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl GuidanceClient for ScriptedGuidanceClient {
    async fn fetch_guidance(&self, mood: &str) -> Reply {
        let (reply, delay) = {
            let mut script = self.lock();
            script.calls.push(mood.to_string());
            let reply = script
                .replies
                .get(mood)
                .cloned()
                .or_else(|| script.fallback.clone())
                .unwrap_or_else(|| Err(FetchError::status(404, "unknown mood")));
            (reply, script.delays.get(mood).copied())
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        reply
    }

    async fn health(&self) -> std::result::Result<(), FetchError> {
        if self.lock().healthy {
            Ok(())
        } else {
            Err(FetchError::transport("scripted outage"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_reply_and_call_log() {
        let client = ScriptedGuidanceClient::new().reply("khush", sample_guidance());

        let result = client.fetch_guidance("khush").await.unwrap();
        assert_eq!(result.arabic, "A");

        let err = client.fetch_guidance("sad").await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));

        assert_eq!(client.calls(), vec!["khush", "sad"]);
    }

    #[tokio::test]
    async fn test_failing_client() {
        let client = ScriptedGuidanceClient::failing(FetchError::status(500, "boom"));
        assert!(client.fetch_guidance("anything").await.is_err());
        assert!(client.health().await.is_err());
    }

    #[tokio::test]
    async fn test_clones_share_script() {
        let client = ScriptedGuidanceClient::always(sample_guidance());
        let clone = client.clone();
        clone.fetch_guidance("happy").await.unwrap();
        assert_eq!(client.calls(), vec!["happy"]);
    }
}
