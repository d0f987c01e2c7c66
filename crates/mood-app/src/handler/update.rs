//! Main update function - handles state transitions (TEA pattern)

use mood_core::prelude::*;
use mood_core::FetchError;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Click { column, row } => {
            if state.presentation.visible && state.presentation.is_outside(column, row) {
                UpdateResult::message(Message::CloseCard)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            state.presentation.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Mood Picker Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleDropdown => {
            let count = state.search.filtered(&state.catalog).len();
            state.search.toggle_dropdown(count);
            UpdateResult::none()
        }

        Message::CloseDropdown => {
            state.search.close_dropdown();
            UpdateResult::none()
        }

        Message::QueryInput { text } => {
            let count = state.catalog.filter(&text).len();
            state.search.set_query(text, count);
            UpdateResult::none()
        }

        Message::HighlightNext => {
            let count = state.search.filtered(&state.catalog).len();
            state.search.move_highlight(true, count);
            UpdateResult::none()
        }

        Message::HighlightPrevious => {
            let count = state.search.filtered(&state.catalog).len();
            state.search.move_highlight(false, count);
            UpdateResult::none()
        }

        Message::ChooseHighlighted => {
            let option = state.search.highlighted_option(&state.catalog).cloned();
            match option {
                Some(option) => state.search.choose(option),
                None => state.search.close_dropdown(),
            }
            UpdateResult::none()
        }

        Message::ChooseMood { value } => {
            let option = state.catalog.find_by_value(&value).cloned();
            match option {
                Some(option) => state.search.choose(option),
                None => warn!("No mood with value {:?} in the catalog", value),
            }
            UpdateResult::none()
        }

        Message::ClearSelection => {
            state.search.clear_selection();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Search Messages
        // ─────────────────────────────────────────────────────────
        Message::SubmitSearch => handle_submit_search(state),

        Message::GuidanceReceived { request_id, result } => {
            if !state.search.finish_success(request_id) {
                debug!("Dropping stale guidance response {}", request_id);
                return UpdateResult::none();
            }
            info!("Guidance received for request {}", request_id);
            UpdateResult::action(state.show_result(result))
        }

        Message::GuidanceFailed { request_id, error } => {
            handle_guidance_failed(state, request_id, error)
        }

        // ─────────────────────────────────────────────────────────
        // Result Card Messages
        // ─────────────────────────────────────────────────────────
        Message::FlipCard { card_id } => {
            if state.presentation.flip(card_id) {
                debug!("Card {} flipped", card_id);
            }
            UpdateResult::none()
        }

        Message::CloseCard => {
            state.close_card();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Backend Messages
        // ─────────────────────────────────────────────────────────
        Message::HealthChecked { error } => {
            state.set_backend_health(error.as_ref());
            UpdateResult::none()
        }
    }
}

fn handle_submit_search(state: &mut AppState) -> UpdateResult {
    if state.search.loading {
        debug!("Search already in flight, ignoring submit");
        return UpdateResult::none();
    }

    match state.search.begin() {
        Ok(ticket) => {
            info!(
                "Searching guidance for {:?} (request {})",
                ticket.mood, ticket.request_id
            );
            state.search.close_dropdown();
            UpdateResult::action(UpdateAction::FetchGuidance {
                request_id: ticket.request_id,
                mood: ticket.mood,
            })
        }
        Err(e) => {
            debug!("Search rejected: {}", e);
            UpdateResult::none()
        }
    }
}

fn handle_guidance_failed(state: &mut AppState, request_id: u64, error: FetchError) -> UpdateResult {
    let status = error.status_code();
    let detail = error.to_string();
    if !state.search.finish_failure(request_id, error) {
        debug!("Dropping stale guidance failure {}", request_id);
        return UpdateResult::none();
    }

    warn!(
        "Guidance request {} failed (status {:?}): {}",
        request_id, status, detail
    );
    UpdateResult::none()
}
