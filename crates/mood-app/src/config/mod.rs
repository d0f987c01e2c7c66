//! Configuration file parsing for Mood Guide
//!
//! Supports:
//! - `<config_dir>/mood-guide/config.toml` - Global settings
//! - `--config <PATH>` - Explicit settings file

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, load_settings_from};
pub use types::*;
