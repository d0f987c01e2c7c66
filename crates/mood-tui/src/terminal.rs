//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use mood_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Report mouse clicks so the result card can close on an outside click
pub fn enable_mouse_capture() -> Result<()> {
    execute!(stdout(), EnableMouseCapture)
        .map_err(|e| Error::terminal(format!("Failed to enable mouse capture: {}", e)))
}

pub fn disable_mouse_capture() {
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        warn!("Failed to disable mouse capture: {}", e);
    }
}
