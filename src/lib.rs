//! Mood Guide
//!
//! Pick how you feel, get a Quran verse or Hadith for it. The terminal UI
//! lives in `mood-tui`; this crate adds the headless runner used by the
//! binary and by scripts.

pub mod headless;

pub use headless::runner::run_headless;
pub use mood_tui::run;
