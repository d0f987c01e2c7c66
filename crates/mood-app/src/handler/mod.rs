//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key and mouse event handlers

pub(crate) mod keys;
pub(crate) mod update;


use tokio::sync::watch;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Ask the backend for guidance on a mood.
    ///
    /// The outcome comes back as `GuidanceReceived` or `GuidanceFailed`
    /// carrying the same `request_id`.
    FetchGuidance { request_id: u64, mood: String },

    /// Send `FlipCard { card_id }` after `delay_ms`, unless `cancel`
    /// turns true first.
    ScheduleFlip {
        card_id: u64,
        delay_ms: u64,
        cancel: watch::Receiver<bool>,
    },

    /// Probe the backend once (runs at startup)
    CheckHealth,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
