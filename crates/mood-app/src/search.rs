//! Mood picker and search request state
//!
//! `SearchState` is plain data: every transition is a method taking the
//! current match count or request id, so the handler stays a thin
//! dispatcher and the rules can be tested without a runtime.

use serde::{Deserialize, Serialize};

use mood_core::error::{EMPTY_MOOD_MESSAGE, FETCH_FAILED_MESSAGE};
use mood_core::prelude::*;
use mood_core::{FetchError, MoodCatalog, MoodOption};

/// A search that passed validation and should hit the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub request_id: u64,
    pub mood: String,
}

/// Picker and request state for one search session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Free text typed into the picker
    pub query: String,
    /// Whether the option list is showing
    pub dropdown_open: bool,
    /// Index into the filtered option list
    pub highlighted: Option<usize>,
    /// Option the user picked, takes precedence over `query`
    pub selected: Option<MoodOption>,
    /// A request is in flight; the search trigger is disabled
    pub loading: bool,
    /// Inline message shown under the search button
    pub error_message: Option<String>,
    /// Cause of the last failed request, never shown to the user
    pub last_failure: Option<FetchError>,
    /// Last request id handed out
    pub request_seq: u64,
    /// Request whose response will be accepted
    pub in_flight: Option<u64>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options matching the current query, in catalog order
    pub fn filtered<'a>(&self, catalog: &'a MoodCatalog) -> Vec<&'a MoodOption> {
        catalog.filter(&self.query)
    }

    /// The highlighted option, if the highlight points at a match
    pub fn highlighted_option<'a>(&self, catalog: &'a MoodCatalog) -> Option<&'a MoodOption> {
        let index = self.highlighted?;
        self.filtered(catalog).get(index).copied()
    }

    pub fn toggle_dropdown(&mut self, match_count: usize) {
        if self.dropdown_open {
            self.close_dropdown();
        } else {
            self.dropdown_open = true;
            self.highlighted = (match_count > 0).then_some(0);
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
        self.highlighted = None;
    }

    /// Replace the query; the highlight jumps back to the first match
    pub fn set_query(&mut self, text: impl Into<String>, match_count: usize) {
        self.query = text.into();
        self.highlighted = (self.dropdown_open && match_count > 0).then_some(0);
    }

    /// Move the highlight by one, wrapping around the match list
    pub fn move_highlight(&mut self, forward: bool, match_count: usize) {
        if !self.dropdown_open || match_count == 0 {
            self.highlighted = None;
            return;
        }
        let next = match self.highlighted {
            None => 0,
            Some(i) if forward => (i + 1) % match_count,
            Some(0) => match_count - 1,
            Some(i) => (i - 1).min(match_count - 1),
        };
        self.highlighted = Some(next);
    }

    /// Pick an option; the query is left untouched
    pub fn choose(&mut self, option: MoodOption) {
        debug!("Mood selected: {}", option.value);
        self.selected = Some(option);
        self.close_dropdown();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Mood to send: the selection's value, else the trimmed query
    pub fn resolve_mood(&self) -> Option<String> {
        match &self.selected {
            Some(option) if !option.value.is_empty() => Some(option.value.clone()),
            _ => {
                let text = self.query.trim();
                (!text.is_empty()).then(|| text.to_string())
            }
        }
    }

    /// Validate and start a search.
    ///
    /// Clears the previous error first. With nothing to send the search
    /// stops here with [`Error::EmptyMood`] and no request id is used.
    pub fn begin(&mut self) -> Result<SearchTicket> {
        self.error_message = None;

        let Some(mood) = self.resolve_mood() else {
            self.error_message = Some(EMPTY_MOOD_MESSAGE.to_string());
            return Err(Error::EmptyMood);
        };

        self.request_seq += 1;
        self.in_flight = Some(self.request_seq);
        self.loading = true;

        Ok(SearchTicket {
            request_id: self.request_seq,
            mood,
        })
    }

    /// Accept a response only if it answers the request in flight
    fn settle(&mut self, request_id: u64) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.loading = false;
        true
    }

    /// Returns false for a stale or unknown request id
    pub fn finish_success(&mut self, request_id: u64) -> bool {
        if !self.settle(request_id) {
            return false;
        }
        self.last_failure = None;
        true
    }

    /// Returns false for a stale or unknown request id
    pub fn finish_failure(&mut self, request_id: u64, error: FetchError) -> bool {
        if !self.settle(request_id) {
            return false;
        }
        self.error_message = Some(FETCH_FAILED_MESSAGE.to_string());
        self.last_failure = Some(error);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn khush() -> MoodOption {
        MoodOption::new("خوش (Khush - Happy)", "khush")
    }

    #[test]
    fn test_begin_with_nothing_is_empty_mood() {
        let mut search = SearchState::new();
        search.query = "   ".to_string();

        let err = search.begin().unwrap_err();

        assert!(matches!(err, Error::EmptyMood));
        assert_eq!(
            search.error_message.as_deref(),
            Some("Please select or type a mood")
        );
        assert!(!search.loading);
        assert_eq!(search.request_seq, 0);
        assert_eq!(search.in_flight, None);
    }

    #[test]
    fn test_selection_wins_over_query() {
        let mut search = SearchState::new();
        search.query = "sad".to_string();
        search.choose(khush());

        let ticket = search.begin().unwrap();

        assert_eq!(ticket.mood, "khush");
        assert_eq!(ticket.request_id, 1);
        assert!(search.loading);
    }

    #[test]
    fn test_query_is_trimmed() {
        let mut search = SearchState::new();
        search.query = "  feeling lost \n".to_string();
        assert_eq!(search.begin().unwrap().mood, "feeling lost");
    }

    #[test]
    fn test_begin_clears_previous_error() {
        let mut search = SearchState::new();
        search.begin().unwrap_err();
        assert!(search.error_message.is_some());

        search.query = "sad".to_string();
        search.begin().unwrap();
        assert!(search.error_message.is_none());
    }

    #[test]
    fn test_failure_sets_generic_message_and_keeps_cause() {
        let mut search = SearchState::new();
        search.query = "sad".to_string();
        let ticket = search.begin().unwrap();

        assert!(search.finish_failure(ticket.request_id, FetchError::status(500, "oops")));

        assert!(!search.loading);
        assert_eq!(
            search.error_message.as_deref(),
            Some("Failed to fetch guidance. Please try again.")
        );
        assert_eq!(search.last_failure, Some(FetchError::status(500, "oops")));
    }

    #[test]
    fn test_stale_response_ignored() {
        let mut search = SearchState::new();
        search.query = "sad".to_string();
        let first = search.begin().unwrap();
        // Simulate the first request being superseded
        search.loading = false;
        let second = search.begin().unwrap();

        assert!(!search.finish_success(first.request_id));
        assert!(search.loading);
        assert!(search.finish_success(second.request_id));
        assert!(!search.loading);
        // A late duplicate is also rejected
        assert!(!search.finish_failure(second.request_id, FetchError::transport("late")));
        assert!(search.error_message.is_none());
    }

    #[test]
    fn test_choose_keeps_query_and_closes_dropdown() {
        let mut search = SearchState::new();
        search.toggle_dropdown(25);
        search.set_query("khu", 1);
        search.choose(khush());

        assert_eq!(search.query, "khu");
        assert!(!search.dropdown_open);
        assert_eq!(search.highlighted, None);
        assert_eq!(search.selected, Some(khush()));
    }

    #[test]
    fn test_toggle_dropdown_highlight() {
        let mut search = SearchState::new();
        search.toggle_dropdown(25);
        assert!(search.dropdown_open);
        assert_eq!(search.highlighted, Some(0));

        search.toggle_dropdown(25);
        assert!(!search.dropdown_open);
        assert_eq!(search.highlighted, None);

        search.toggle_dropdown(0);
        assert!(search.dropdown_open);
        assert_eq!(search.highlighted, None);
    }

    #[test]
    fn test_move_highlight_wraps() {
        let mut search = SearchState::new();
        search.toggle_dropdown(3);

        search.move_highlight(true, 3);
        assert_eq!(search.highlighted, Some(1));
        search.move_highlight(true, 3);
        search.move_highlight(true, 3);
        assert_eq!(search.highlighted, Some(0));
        search.move_highlight(false, 3);
        assert_eq!(search.highlighted, Some(2));
    }

    #[test]
    fn test_set_query_resets_highlight() {
        let mut search = SearchState::new();
        search.toggle_dropdown(25);
        search.move_highlight(true, 25);
        search.set_query("zzz", 0);
        assert_eq!(search.highlighted, None);
        search.set_query("sad", 2);
        assert_eq!(search.highlighted, Some(0));
    }

    #[test]
    fn test_highlighted_option_follows_filter() {
        let catalog = MoodCatalog::new();
        let mut search = SearchState::new();
        search.toggle_dropdown(catalog.len());
        let count = catalog.filter("hope").len();
        search.set_query("hope", count);
        search.move_highlight(true, count);

        assert_eq!(
            search.highlighted_option(&catalog).map(|o| o.value.as_str()),
            Some("mayoos")
        );
    }

    #[test]
    fn test_state_is_serializable() {
        let mut search = SearchState::new();
        search.choose(khush());
        let json = serde_json::to_string(&search).unwrap();
        let back: SearchState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, search);
    }
}
