//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the tracing filter
pub const LOG_ENV_VAR: &str = "MOOD_GUIDE_LOG";

const LOG_FILE_NAME: &str = "mood-guide.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/mood-guide/logs/` because the TUI
/// owns stdout. Log level is controlled by the `MOOD_GUIDE_LOG` environment
/// variable.
///
/// # Examples
/// ```bash
/// MOOD_GUIDE_LOG=debug cargo run
/// MOOD_GUIDE_LOG=mood_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via MOOD_GUIDE_LOG
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("mood_guide=info,mood_app=info,mood_client=info,mood_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Mood Guide starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
pub fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("mood-guide").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_is_app_scoped() {
        let dir = get_log_directory();
        assert!(dir.ends_with("mood-guide/logs"));
    }
}
