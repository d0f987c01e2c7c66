//! # mood-client - Guidance Endpoint Client
//!
//! Talks to the guidance backend over HTTP: one `POST` per search carrying
//! the mood, plus a `GET` health probe.
//!
//! Depends on [`mood_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`GuidanceClient`] - Async trait the app layer is generic over
//! - [`HttpGuidanceClient`] - reqwest-backed implementation
//! - [`ClientConfig`] - Base URL, endpoint paths and optional timeout
//! - [`MoodRequest`] - JSON request body

pub mod client;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{GuidanceClient, HttpGuidanceClient, LocalGuidanceClient};
pub use protocol::{ClientConfig, MoodRequest, DEFAULT_BASE_URL, HEALTH_PATH, VERSE_PATH};
