//! Configuration types for Mood Guide
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ApiSettings` - Where the guidance backend lives
//! - `UiSettings` - Animation timing and startup behavior

use std::time::Duration;

use mood_client::{ClientConfig, DEFAULT_BASE_URL, HEALTH_PATH, VERSE_PATH};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Guidance backend settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Scheme, host and port of the backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the guidance endpoint
    #[serde(default = "default_verse_path")]
    pub verse_path: String,

    /// Path of the liveness endpoint
    #[serde(default = "default_health_path")]
    pub health_path: String,

    /// Request timeout in milliseconds (0 = wait indefinitely)
    #[serde(default)]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            verse_path: default_verse_path(),
            health_path: default_health_path(),
            timeout_ms: 0,
        }
    }
}

impl ApiSettings {
    pub fn client_config(&self) -> ClientConfig {
        let timeout = (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms));
        ClientConfig {
            base_url: self.base_url.clone(),
            verse_path: self.verse_path.clone(),
            health_path: self.health_path.clone(),
            timeout,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_verse_path() -> String {
    VERSE_PATH.to_string()
}

fn default_health_path() -> String {
    HEALTH_PATH.to_string()
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Delay before the result card flips to reveal the guidance
    #[serde(default = "default_flip_delay_ms")]
    pub flip_delay_ms: u64,

    /// Animation tick interval
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Probe the backend's health endpoint at startup
    #[serde(default = "default_true")]
    pub check_health: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            flip_delay_ms: default_flip_delay_ms(),
            tick_rate_ms: default_tick_rate_ms(),
            check_health: true,
        }
    }
}

/// Lower bound on the tick interval to keep redraws sane
pub const MIN_TICK_RATE_MS: u64 = 16;

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }
}

fn default_flip_delay_ms() -> u64 {
    3000
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_true() -> bool {
    true
}
