//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use mood_core::{FetchError, GuidanceResult};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Left mouse button pressed at a terminal cell
    Click { column: u16, row: u16 },

    /// Tick event for animations
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Mood Picker Messages
    // ─────────────────────────────────────────────────────────
    /// Open or close the mood dropdown
    ToggleDropdown,
    /// Close the mood dropdown, keeping the query
    CloseDropdown,
    /// Replace the query text
    QueryInput { text: String },
    /// Move the dropdown highlight down
    HighlightNext,
    /// Move the dropdown highlight up
    HighlightPrevious,
    /// Choose the highlighted option (or just close if nothing matches)
    ChooseHighlighted,
    /// Choose a catalog option by its value
    ChooseMood { value: String },
    /// Forget the chosen option
    ClearSelection,

    // ─────────────────────────────────────────────────────────
    // Search Messages
    // ─────────────────────────────────────────────────────────
    /// Start a guidance search with the selection or typed text
    SubmitSearch,
    /// A guidance request completed
    GuidanceReceived {
        request_id: u64,
        result: GuidanceResult,
    },
    /// A guidance request failed
    GuidanceFailed { request_id: u64, error: FetchError },

    // ─────────────────────────────────────────────────────────
    // Result Card Messages
    // ─────────────────────────────────────────────────────────
    /// Flip delay elapsed for the given card
    FlipCard { card_id: u64 },
    /// Dismiss the result card
    CloseCard,

    // ─────────────────────────────────────────────────────────
    // Backend Messages
    // ─────────────────────────────────────────────────────────
    /// Startup health probe finished
    HealthChecked { error: Option<FetchError> },
}
