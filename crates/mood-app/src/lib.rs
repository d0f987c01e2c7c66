//! mood-app - Application state and orchestration for Mood Guide
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the mood picker and search state, the result card lifecycle,
//! the Engine that both front ends drive, and configuration loading.

pub mod actions;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod presentation;
pub mod process;
pub mod search;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use presentation::{HitBox, PresentationState};
pub use search::{SearchState, SearchTicket};
pub use state::{AppPhase, AppState, BackendStatus};
