//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use mood_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "mood-guide";

/// Default location: `<config_dir>/mood-guide/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location
///
/// Returns default settings if there is no config directory or no file.
pub fn load_settings() -> Settings {
    match default_config_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Load settings from an explicit file
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file unless one already exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# Mood Guide Configuration

[api]
base_url = "http://localhost:5001"
verse_path = "/api/get_verse"
health_path = "/api/health"
timeout_ms = 0          # 0 = wait for the backend indefinitely

[ui]
flip_delay_ms = 3000    # How long the card shows "Preparing guidance…"
tick_rate_ms = 50       # Animation frame interval
check_health = true     # Probe the backend at startup
"#;
    std::fs::write(config_path, default_content)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(())
}
