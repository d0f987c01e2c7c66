//! Mood Guide - mood-based Quran & Hadith guidance in the terminal
//!
//! This is the binary entry point. All logic lives in the libraries.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, Result};
use tracing::{info, warn};

use mood_app::config;
use mood_client::HttpGuidanceClient;

/// Mood Guide - find a verse or hadith for how you feel
#[derive(Parser, Debug)]
#[command(name = "mood-guide")]
#[command(about = "Mood-based Quran & Hadith guidance finder", long_about = None)]
struct Args {
    /// Guidance backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long, requires = "mood")]
    headless: bool,

    /// Mood to search for in headless mode
    #[arg(long, value_name = "MOOD")]
    mood: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    mood_core::logging::init()?;

    let mut settings = match &args.config {
        Some(path) => config::load_settings_from(path),
        None => {
            // First run leaves a commented template behind to edit
            if let Some(path) = config::default_config_path() {
                if let Err(e) = config::init_config_file(&path) {
                    warn!("Could not write default config: {}", e);
                }
            }
            config::load_settings()
        }
    };
    if let Some(url) = args.api_url {
        info!("Backend URL overridden from command line: {}", url);
        settings.api.base_url = url;
    }

    let client = HttpGuidanceClient::new(&settings.api.client_config())?;

    if args.headless {
        let Some(mood) = args.mood else {
            bail!("--headless needs --mood");
        };
        mood_guide::run_headless(settings, client, &mood).await?;
    } else {
        mood_guide::run(settings, client).await?;
    }
    Ok(())
}
