//! Headless mode runner - one search, no terminal
//!
//! Feeds the mood into the Engine exactly as the TUI would, then waits on
//! the message channel until the search settles.

use tracing::{info, warn};

use mood_app::config::Settings;
use mood_app::{Engine, Message};
use mood_client::GuidanceClient;
use mood_core::error::FETCH_FAILED_MESSAGE;
use mood_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless<C>(settings: Settings, client: C, mood: &str) -> Result<()>
where
    C: GuidanceClient + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Mood Guide starting in HEADLESS mode");
    info!("Mood: {:?}", mood);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(settings, client);
    engine.spawn_signal_handler();

    let result = search_once(&mut engine, mood, &mut |event| event.emit()).await;

    engine.shutdown();
    info!("Mood Guide headless mode exiting");
    result
}

/// Submit `mood` and report progress through `emit` until the search settles
pub(crate) async fn search_once<C, F>(engine: &mut Engine<C>, mood: &str, emit: &mut F) -> Result<()>
where
    C: GuidanceClient + Sync + 'static,
    F: FnMut(HeadlessEvent),
{
    // Catalog values are chosen, anything else is typed like free text
    let pick = if engine.state.catalog.find_by_value(mood).is_some() {
        Message::ChooseMood {
            value: mood.to_string(),
        }
    } else {
        Message::QueryInput {
            text: mood.to_string(),
        }
    };
    engine.process_message(pick);
    engine.process_message(Message::SubmitSearch);

    if !engine.state.search.loading {
        let message = engine
            .state
            .search
            .error_message
            .clone()
            .unwrap_or_else(|| Error::EmptyMood.to_string());
        emit(HeadlessEvent::error(message, None));
        return Err(Error::EmptyMood);
    }

    let submitted = engine.state.search.resolve_mood().unwrap_or_default();
    emit(HeadlessEvent::search_started(&submitted));

    while engine.state.search.loading {
        if engine.should_quit() {
            info!("Quit requested before guidance arrived");
            return Ok(());
        }

        let Some(msg) = engine.next_message().await else {
            return Err(Error::ChannelClosed);
        };

        let failure = match &msg {
            Message::GuidanceFailed { error, .. } => Some(error.clone()),
            _ => None,
        };
        engine.process_message(msg);

        if let Some(result) = &engine.state.result {
            emit(HeadlessEvent::guidance(&submitted, result.clone()));
            return Ok(());
        }

        if !engine.state.search.loading {
            if let Some(error) = failure {
                warn!("Headless search failed: {}", error);
                emit(HeadlessEvent::error(
                    FETCH_FAILED_MESSAGE,
                    Some(error.to_string()),
                ));
                return Err(Error::GuidanceFetch(error));
            }
        }
    }

    Ok(())
}
