//! # mood-core - Core Domain Types
//!
//! Foundation crate for Mood Guide. Provides domain types, the mood catalog,
//! error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`MoodOption`] - A selectable mood with display label and canonical value
//! - [`GuidanceResult`] - Arabic text, Urdu translation, reference and explanation
//!
//! ### Mood Catalog (`catalog`)
//! - [`MoodCatalog`] - The merged Urdu + English option set and its filter
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant group per layer
//! - [`FetchError`] - Structured guidance request failure
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mood_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Mood Guide crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{MoodCatalog, ENGLISH_MOODS, URDU_MOODS};
pub use error::{Error, FetchError, Result};
pub use types::{GuidanceResult, MoodOption};
