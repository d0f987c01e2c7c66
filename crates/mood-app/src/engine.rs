//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the message channel and the guidance
//! client. Both front ends feed it messages and read its state; neither
//! touches the network or timers directly.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use mood_client::GuidanceClient;

use crate::actions::handle_action;
use crate::config::Settings;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the unified message channel
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for Mood Guide.
///
/// Generic over the guidance client so tests can run the full loop against
/// a scripted backend.
pub struct Engine<C> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, terminal events).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    client: Arc<C>,
}

impl<C> Engine<C>
where
    C: GuidanceClient + Sync + 'static,
{
    /// Create an engine with the given settings and client.
    ///
    /// Spawns nothing; call [`Engine::start`] from inside the runtime.
    pub fn new(settings: Settings, client: C) -> Self {
        let state = AppState::with_settings(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            client: Arc::new(client),
        }
    }

    /// Kick off startup work: the backend health probe, if enabled
    pub fn start(&mut self) {
        if self.state.settings.ui.check_health {
            debug!("Probing guidance backend");
            handle_action(
                UpdateAction::CheckHealth,
                self.msg_tx.clone(),
                self.client.clone(),
            );
        }
    }

    /// Route SIGINT/SIGTERM into a `Message::Quit`
    pub fn spawn_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.client);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message from a background task or input source
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Close any open card so its flip timer stops with the app
    pub fn shutdown(&mut self) {
        if self.state.close_card() {
            debug!("Closed result card on shutdown");
        }
        info!("Engine shut down");
    }
}
