//! Application error types with rich context

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown when a search is started with neither a selection nor text
pub const EMPTY_MOOD_MESSAGE: &str = "Please select or type a mood";

/// Message shown for every failed guidance request
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch guidance. Please try again.";

/// Why a guidance request failed.
///
/// The user only ever sees [`FETCH_FAILED_MESSAGE`]; this detail is kept
/// for logs and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchError {
    /// The endpoint answered with a non-success status
    #[error("guidance endpoint returned HTTP {status}")]
    Status { status: u16, body: String },

    /// The request never produced a response (connection refused, DNS, timeout)
    #[error("guidance request failed: {message}")]
    Transport { message: String },

    /// A success response whose body was not a guidance object
    #[error("guidance response could not be decoded: {message}")]
    Decode { message: String },
}

impl FetchError {
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status code, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid guidance endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel closed unexpectedly")]
    ChannelClosed,

    // ─────────────────────────────────────────────────────────────
    // Search Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{}", EMPTY_MOOD_MESSAGE)]
    EmptyMood,

    #[error("{}", FETCH_FAILED_MESSAGE)]
    GuidanceFetch(#[source] FetchError),
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_endpoint(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::GuidanceFetch(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_user_facing_messages_are_verbatim() {
        assert_eq!(Error::EmptyMood.to_string(), "Please select or type a mood");
        assert_eq!(
            Error::GuidanceFetch(FetchError::status(500, "boom")).to_string(),
            "Failed to fetch guidance. Please try again."
        );
    }

    #[test]
    fn test_fetch_error_detail_kept_as_source() {
        let err: Error = FetchError::status(503, "unavailable").into();
        let source = err.source().expect("fetch error keeps its cause");
        assert_eq!(source.to_string(), "guidance endpoint returned HTTP 503");
    }

    #[test]
    fn test_fetch_error_status_code() {
        assert_eq!(FetchError::status(404, "").status_code(), Some(404));
        assert_eq!(FetchError::transport("refused").status_code(), None);
        assert_eq!(FetchError::decode("eof").status_code(), None);
    }

    #[test]
    fn test_fetch_error_serializes_with_kind_tag() {
        let json = serde_json::to_value(FetchError::transport("connection refused")).unwrap();
        assert_eq!(json["kind"], "transport");
        assert_eq!(json["message"], "connection refused");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_infrastructure_messages() {
        assert_eq!(
            Error::config("Failed to write config.toml").to_string(),
            "Configuration error: Failed to write config.toml"
        );
        assert_eq!(
            Error::terminal("no tty").to_string(),
            "Terminal error: no tty"
        );
        assert_eq!(
            Error::invalid_endpoint("::", "relative URL without a base").to_string(),
            "Invalid guidance endpoint '::': relative URL without a base"
        );
    }
}
