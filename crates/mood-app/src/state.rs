//! Application state (Model in TEA pattern)

use serde::Serialize;

use mood_core::prelude::*;
use mood_core::{FetchError, GuidanceResult, MoodCatalog};

use crate::config::Settings;
use crate::handler::UpdateAction;
use crate::presentation::PresentationState;
use crate::search::SearchState;

/// Lifecycle of the whole application
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// What the startup probe learned about the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BackendStatus {
    /// Not probed (yet, or disabled in config)
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Static list of moods offered in the picker
    pub catalog: MoodCatalog,

    pub search: SearchState,

    pub presentation: PresentationState,

    /// Guidance shown on the card; present only while the card is open
    pub result: Option<GuidanceResult>,

    pub settings: Settings,

    pub backend: BackendStatus,

    /// Animation ticks since startup, used by the spinner
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            catalog: MoodCatalog::new(),
            search: SearchState::new(),
            presentation: PresentationState::new(),
            result: None,
            settings,
            backend: BackendStatus::Unknown,
            tick: 0,
        }
    }

    /// Store a fresh result and open a new card for it.
    ///
    /// Returns the action that schedules the card's flip.
    pub fn show_result(&mut self, result: GuidanceResult) -> UpdateAction {
        self.result = Some(result);
        let (card_id, cancel) = self.presentation.open();
        let delay_ms = self.settings.ui.flip_delay_ms;
        info!("Showing guidance on card {}, flip in {}ms", card_id, delay_ms);
        UpdateAction::ScheduleFlip {
            card_id,
            delay_ms,
            cancel,
        }
    }

    /// Hide the card and drop its result
    pub fn close_card(&mut self) -> bool {
        if !self.presentation.close() {
            return false;
        }
        self.result = None;
        true
    }

    pub fn set_backend_health(&mut self, error: Option<&FetchError>) {
        self.backend = match error {
            None => BackendStatus::Online,
            Some(e) => {
                warn!("Guidance backend health check failed: {}", e);
                BackendStatus::Offline
            }
        };
    }

    pub fn request_quit(&mut self) {
        self.close_card();
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guidance() -> GuidanceResult {
        GuidanceResult {
            arabic: "A".into(),
            urdu: "U".into(),
            reference: "R".into(),
            explanation: "E".into(),
            kind: None,
        }
    }

    #[test]
    fn test_new_state() {
        let state = AppState::new();
        assert_eq!(state.phase, AppPhase::Running);
        assert_eq!(state.catalog.len(), 25);
        assert_eq!(state.backend, BackendStatus::Unknown);
        assert!(state.result.is_none());
        assert!(!state.presentation.visible);
    }

    #[test]
    fn test_show_result_schedules_flip_with_configured_delay() {
        let mut settings = Settings::default();
        settings.ui.flip_delay_ms = 1200;
        let mut state = AppState::with_settings(settings);

        let action = state.show_result(guidance());

        assert!(state.presentation.visible);
        assert_eq!(state.result, Some(guidance()));
        match action {
            UpdateAction::ScheduleFlip {
                card_id, delay_ms, ..
            } => {
                assert_eq!(card_id, state.presentation.card_id);
                assert_eq!(delay_ms, 1200);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_close_card_drops_result() {
        let mut state = AppState::new();
        let _ = state.show_result(guidance());

        assert!(state.close_card());
        assert!(state.result.is_none());
        assert!(!state.presentation.visible);
        assert!(!state.close_card());
    }

    #[test]
    fn test_backend_health() {
        let mut state = AppState::new();
        state.set_backend_health(None);
        assert_eq!(state.backend, BackendStatus::Online);
        state.set_backend_health(Some(&FetchError::transport("refused")));
        assert_eq!(state.backend, BackendStatus::Offline);
    }

    #[test]
    fn test_request_quit() {
        let mut state = AppState::new();
        assert!(!state.should_quit());
        state.request_quit();
        assert!(state.should_quit());
    }

    #[test]
    fn test_request_quit_drops_open_card() {
        let mut state = AppState::new();
        let _ = state.show_result(guidance());

        state.request_quit();

        assert!(state.should_quit());
        assert!(!state.presentation.visible);
        assert!(state.result.is_none());
    }
}
