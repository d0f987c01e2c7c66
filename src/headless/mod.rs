//! Headless mode - JSON event output instead of the TUI
//!
//! Runs one guidance search through the same Engine the TUI uses and writes
//! structured events to stdout, one JSON object per line (NDJSON).
//!
//! # Example Output
//!
//! ```json
//! {"event":"search_started","mood":"khush","timestamp":1704700001000}
//! {"event":"guidance","mood":"khush","arabic":"…","urdu":"…","reference":"…","explanation":"…","timestamp":1704700002000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use mood_core::GuidanceResult;

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A search was submitted to the backend
    SearchStarted { mood: String, timestamp: i64 },

    /// The backend answered with guidance
    Guidance {
        mood: String,
        #[serde(flatten)]
        result: GuidanceResult,
        timestamp: i64,
    },

    /// The search could not complete
    Error {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn search_started(mood: &str) -> Self {
        Self::SearchStarted {
            mood: mood.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn guidance(mood: &str, result: GuidanceResult) -> Self {
        Self::Guidance {
            mood: mood.to_string(),
            result,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, detail: Option<String>) -> Self {
        Self::Error {
            message: message.into(),
            detail,
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_started_shape() {
        let event = HeadlessEvent::search_started("khush");
        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "search_started");
        assert_eq!(json["mood"], "khush");
        assert!(json["timestamp"].is_i64());
    }

    #[test]
    fn test_guidance_flattens_fields() {
        let result = GuidanceResult {
            arabic: "a".to_string(),
            urdu: "u".to_string(),
            reference: "r".to_string(),
            explanation: "e".to_string(),
            kind: Some("hadith".to_string()),
        };
        let json = serde_json::to_value(HeadlessEvent::guidance("sad", result)).unwrap();
        assert_eq!(json["event"], "guidance");
        assert_eq!(json["arabic"], "a");
        assert_eq!(json["explanation"], "e");
        assert_eq!(json["type"], "hadith");
    }

    #[test]
    fn test_error_omits_missing_detail() {
        let json = serde_json::to_value(HeadlessEvent::error("boom", None)).unwrap();
        assert_eq!(json["event"], "error");
        assert_eq!(json["message"], "boom");
        assert!(json.get("detail").is_none());
    }
}
