//! Wire types and endpoint resolution for the guidance backend

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use mood_core::prelude::*;

/// Backend address used when nothing is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Path of the guidance endpoint
pub const VERSE_PATH: &str = "/api/get_verse";

/// Path of the liveness endpoint
pub const HEALTH_PATH: &str = "/api/health";

/// Request body for `POST /api/get_verse`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRequest {
    pub mood: String,
}

impl MoodRequest {
    pub fn new(mood: impl Into<String>) -> Self {
        Self { mood: mood.into() }
    }
}

/// Where the backend lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub verse_path: String,
    pub health_path: String,
    /// `None` means requests may wait forever
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            verse_path: VERSE_PATH.to_string(),
            health_path: HEALTH_PATH.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL of the guidance endpoint
    pub fn verse_url(&self) -> Result<Url> {
        self.join(&self.verse_path)
    }

    /// Absolute URL of the health endpoint
    pub fn health_url(&self) -> Result<Url> {
        self.join(&self.health_path)
    }

    fn join(&self, path: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| Error::invalid_endpoint(&self.base_url, e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(Error::invalid_endpoint(
                &self.base_url,
                "URL cannot be used as a base",
            ));
        }
        base.join(path)
            .map_err(|e| Error::invalid_endpoint(format!("{}{}", self.base_url, path), e.to_string()))
    }
}
