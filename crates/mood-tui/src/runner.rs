//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: set up the terminal, drive the Engine, restore the terminal
//! - `run_loop`: drain background messages, draw, poll terminal input

use tracing::{info, warn};

use mood_app::config::Settings;
use mood_app::Engine;
use mood_client::GuidanceClient;
use mood_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI against the given guidance client
pub async fn run<C>(settings: Settings, client: C) -> Result<()>
where
    C: GuidanceClient + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let tick_rate = settings.ui.tick_rate();
    info!(
        "Starting TUI: tick_rate={:?}, flip_delay={}ms",
        tick_rate, settings.ui.flip_delay_ms
    );

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        // Keyboard still works without it
        warn!("Mouse capture unavailable: {}", e);
    }

    let mut engine = Engine::new(settings, client);
    engine.spawn_signal_handler();
    engine.start();

    let result = run_loop(&mut term, &mut engine, tick_rate);

    engine.shutdown();

    terminal::disable_mouse_capture();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<C>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<C>,
    tick_rate: std::time::Duration,
) -> Result<()>
where
    C: GuidanceClient + Sync + 'static,
{
    while !engine.should_quit() {
        // Results, flip timers, health probe and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        // Handle terminal events (Tick when idle)
        if let Some(message) = event::poll(tick_rate)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
